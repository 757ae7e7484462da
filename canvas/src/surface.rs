//! Drawing surface abstraction.
//!
//! The engine only ever issues this fixed set of operations. The browser
//! implementation lives in [`crate::render`]; [`RecordingSurface`] logs the
//! calls instead of painting, so engine behavior can be asserted without a
//! canvas element.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// A 2D target that can stroke straight-line paths.
pub trait Surface {
    /// Set the active stroke color.
    fn set_stroke_color(&mut self, color: &str);
    /// The active stroke color as the surface reports it.
    fn stroke_color(&self) -> String;
    /// Set the active line width.
    fn set_line_width(&mut self, width: f64);
    /// The active line width.
    fn line_width(&self) -> f64;
    /// Start a new path, discarding the current one.
    fn begin_path(&mut self);
    /// Move the path cursor without drawing.
    fn move_to(&mut self, x: f64, y: f64);
    /// Add a straight segment from the cursor to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);
    /// Stroke the current path with the active color and width.
    fn stroke(&mut self);
    /// Close the current path.
    fn close_path(&mut self);
    /// Erase the whole surface.
    fn clear(&mut self);
}

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetStrokeColor(String),
    SetLineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    ClosePath,
    Clear,
}

impl SurfaceCall {
    /// Whether this call changes pixels or path geometry (as opposed to style).
    #[must_use]
    pub fn is_draw(&self) -> bool {
        !matches!(self, Self::SetStrokeColor(_) | Self::SetLineWidth(_))
    }
}

/// Surface fake that records every call in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    color: String,
    width: f64,
    calls: Vec<SurfaceCall>,
}

impl Default for RecordingSurface {
    /// Starts with the 2D context defaults: black, width 1.
    fn default() -> Self {
        Self { color: "black".to_owned(), width: 1.0, calls: Vec::new() }
    }
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls since construction or the last [`RecordingSurface::take_calls`].
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Drain the recorded calls.
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn set_stroke_color(&mut self, color: &str) {
        color.clone_into(&mut self.color);
        self.calls.push(SurfaceCall::SetStrokeColor(color.to_owned()));
    }

    fn stroke_color(&self) -> String {
        self.color.clone()
    }

    fn set_line_width(&mut self, width: f64) {
        self.width = width;
        self.calls.push(SurfaceCall::SetLineWidth(width));
    }

    fn line_width(&self) -> f64 {
        self.width
    }

    fn begin_path(&mut self) {
        self.calls.push(SurfaceCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(SurfaceCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(SurfaceCall::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.calls.push(SurfaceCall::Stroke);
    }

    fn close_path(&mut self) {
        self.calls.push(SurfaceCall::ClosePath);
    }

    fn clear(&mut self) {
        self.calls.push(SurfaceCall::Clear);
    }
}
