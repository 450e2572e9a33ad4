// Recording drawing surface shared by the host-side tests.

#![allow(dead_code)]
use cinematch_web::DrawingSurface;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Alpha(f64),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    StrokeStyle(String),
    LineWidth(f64),
    LineDash(Vec<f64>),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc(f64, f64, f64),
    ArcTo,
    ClosePath,
    Stroke,
    StrokeRect(f64, f64, f64, f64),
}

pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub alpha: f64,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: 1.0,
            ops: Vec::new(),
        }
    }

    pub fn take_ops(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn global_alpha(&self) -> f64 {
        self.alpha
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
        self.ops.push(Op::Alpha(alpha));
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Translate(x, y));
    }
    fn rotate(&mut self, radians: f64) {
        self.ops.push(Op::Rotate(radians));
    }
    fn set_stroke_style(&mut self, color: &str) {
        self.ops.push(Op::StrokeStyle(color.to_owned()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }
    fn set_line_dash(&mut self, segments: &[f64]) {
        self.ops.push(Op::LineDash(segments.to_vec()));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) {
        self.ops.push(Op::Arc(x, y, radius));
    }
    fn arc_to(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, _radius: f64) {
        self.ops.push(Op::ArcTo);
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::StrokeRect(x, y, w, h));
    }
}
