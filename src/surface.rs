//! Immediate-mode 2D drawing abstraction.
//!
//! The doodle field only ever talks to this trait. In the browser it is backed
//! by `CanvasRenderingContext2d` (see `canvas.rs`); host tests use a recorder.

/// A fixed-size raster surface that accepts vector stroke commands.
///
/// Method names follow the canvas 2D API so the browser implementation is a
/// thin forwarding layer.
pub trait DrawingSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_size(&mut self, width: u32, height: u32);

    /// Clear every pixel of the surface.
    fn clear(&mut self);

    fn global_alpha(&self) -> f64;
    fn set_global_alpha(&mut self, alpha: f64);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);

    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    /// An empty slice switches back to solid lines.
    fn set_line_dash(&mut self, segments: &[f64]);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Stroke a full circle as its own path.
    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.begin_path();
        self.arc(x, y, radius, 0.0, std::f64::consts::TAU);
        self.stroke();
    }

    /// Append a rounded rectangle to the current path.
    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        let r = radius.min(w.abs() / 2.0).min(h.abs() / 2.0).max(0.0);
        self.move_to(x + r, y);
        self.arc_to(x + w, y, x + w, y + h, r);
        self.arc_to(x + w, y + h, x, y + h, r);
        self.arc_to(x, y + h, x, y, r);
        self.arc_to(x, y, x + w, y, r);
        self.close_path();
    }

    /// Run `draw` with the global alpha set to `alpha`, then put the previous
    /// alpha back so nothing leaks into later drawing.
    fn with_alpha<F>(&mut self, alpha: f64, draw: F)
    where
        F: FnOnce(&mut Self),
        Self: Sized,
    {
        let previous = self.global_alpha();
        self.set_global_alpha(alpha);
        draw(self);
        self.set_global_alpha(previous);
    }
}
