use crate::error::SurfaceError;
use crate::surface::DrawingSurface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`DrawingSurface`] backed by an HTML canvas and its 2D context.
///
/// Canvas drawing calls that return `Result` only fail for non-finite
/// arguments; those errors are dropped like the rest of the frame glue does.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, id: &str) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or_else(|| SurfaceError::NoContext(id.to_owned()))?;
        Ok(Self { canvas, ctx })
    }

    pub fn from_element_id(id: &str) -> Result<Self, SurfaceError> {
        let document = web::window()
            .and_then(|w| w.document())
            .ok_or(SurfaceError::NoWindow)?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::MissingCanvas(id.to_owned()))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| SurfaceError::NotACanvas(id.to_owned()))?;
        Self::new(canvas, id)
    }
}

impl DrawingSurface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn global_alpha(&self) -> f64 {
        self.ctx.global_alpha()
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        _ = self.ctx.translate(x, y);
    }

    fn rotate(&mut self, radians: f64) {
        _ = self.ctx.rotate(radians);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        let array = js_sys::Array::new();
        for s in segments {
            array.push(&JsValue::from_f64(*s));
        }
        _ = self.ctx.set_line_dash(&array);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        _ = self.ctx.arc(x, y, radius, start, end);
    }

    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
        _ = self.ctx.arc_to(x1, y1, x2, y2, radius);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.stroke_rect(x, y, w, h);
    }
}
