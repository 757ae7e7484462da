//! Rendering: the browser [`Surface`] backed by a 2D canvas context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It forwards the engine's path operations one-to-one and reads the
//! context's own `strokeStyle`/`lineWidth` back, so recorded points capture
//! what the browser actually normalized (e.g. `"blue"` reads back as `#0000ff`).

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::surface::Surface;

/// A canvas element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    /// The backing canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn stroke_color(&self) -> String {
        // Gradients and patterns have no string form.
        self.ctx.stroke_style().as_string().unwrap_or_default()
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn line_width(&self) -> f64 {
        self.ctx.line_width()
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

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn clear(&mut self) {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }
}
