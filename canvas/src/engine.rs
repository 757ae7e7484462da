use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::input::{InputState, PointerEvent, Position};
use crate::render::CanvasSurface;
use crate::state::{self, StateView, ToolState, line_width_for};
use crate::store::{self, StateStore};
use crate::stroke::{Point, PointKind, StrokeLog, StrokePolicy};
use crate::surface::Surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Render one point.
///
/// Optionally clears the surface, applies the point's own color and width,
/// then: `Begin` starts a path at the point, `Move` strokes a segment to it,
/// `End` strokes and closes the path. Live drawing and replay both go through
/// here, so they produce identical surface calls.
pub fn draw_point<S: Surface + ?Sized>(surface: &mut S, point: &Point, clear_first: bool) {
    if clear_first {
        surface.clear();
    }
    surface.set_line_width(point.size);
    surface.set_stroke_color(&point.color);
    match point.kind {
        PointKind::Begin => {
            surface.begin_path();
            surface.move_to(point.x, point.y);
        }
        PointKind::Move => {
            surface.line_to(point.x, point.y);
            surface.stroke();
        }
        PointKind::End => {
            surface.stroke();
            surface.close_path();
        }
    }
}

/// Core engine state: everything except acquiring the canvas element.
///
/// Generic over the surface so it can be tested with
/// [`crate::surface::RecordingSurface`].
pub struct EngineCore<S: Surface> {
    surface: S,
    config: BoardConfig,
    tool: ToolState,
    points: StrokeLog,
    input: InputState,
}

impl<S: Surface> EngineCore<S> {
    /// Create an engine and apply the configured default tool to the surface.
    #[must_use]
    pub fn new(surface: S, config: BoardConfig) -> Self {
        let tool = ToolState::from_config(&config);
        let mut core = Self { surface, config, tool, points: StrokeLog::new(), input: InputState::Idle };
        core.apply_tool_style();
        core
    }

    // --- Tool ---

    /// Store the color and make it the surface's stroke color.
    pub fn set_color(&mut self, color: &str) {
        color.clone_into(&mut self.tool.color);
        self.surface.set_stroke_color(color);
    }

    /// Store the brush size and set the surface line width to half of it.
    pub fn set_size(&mut self, size: f64) {
        self.tool.size = size;
        self.surface.set_line_width(line_width_for(size));
    }

    fn apply_tool_style(&mut self) {
        self.surface.set_stroke_color(&self.tool.color);
        self.surface.set_line_width(self.tool.line_width());
    }

    // --- Recording and replay ---

    /// Append a point using the surface's current width and color.
    pub fn record_point(&mut self, x: f64, y: f64, kind: PointKind) -> &Point {
        let point = Point::new(x, y, self.surface.line_width(), self.surface.stroke_color(), kind);
        self.points.push(point)
    }

    /// Render one point onto this engine's surface. See [`draw_point`].
    pub fn draw_point(&mut self, point: &Point, clear_first: bool) {
        draw_point(&mut self.surface, point, clear_first);
    }

    /// Render `points` in order, then restore the tool's color and width.
    ///
    /// Restoring keeps the next recorded point on the tool settings rather
    /// than whatever the last replayed point used.
    pub fn replay(&mut self, points: &[Point], clear_first: bool) {
        if clear_first {
            self.surface.clear();
        }
        for point in points {
            draw_point(&mut self.surface, point, false);
        }
        self.apply_tool_style();
    }

    /// Clear the surface and replay the engine's own log, ending on the tool style.
    pub fn redraw(&mut self) {
        self.surface.clear();
        for point in &self.points {
            draw_point(&mut self.surface, point, false);
        }
        self.apply_tool_style();
    }

    // --- Pointer input ---

    /// Feed a pointer event through the gesture state machine.
    ///
    /// When the event contributes to a stroke, the point is recorded, drawn,
    /// and returned.
    pub fn on_pointer(&mut self, event: PointerEvent, pos: Position) -> Option<Point> {
        let kind = self.input.transition(event)?;
        let point = self.record_point(pos.x, pos.y, kind).clone();
        draw_point(&mut self.surface, &point, false);
        Some(point)
    }

    pub fn on_pointer_down(&mut self, pos: Position) -> Option<Point> {
        self.on_pointer(PointerEvent::Down, pos)
    }

    pub fn on_pointer_move(&mut self, pos: Position) -> Option<Point> {
        self.on_pointer(PointerEvent::Move, pos)
    }

    pub fn on_pointer_up(&mut self, pos: Position) -> Option<Point> {
        self.on_pointer(PointerEvent::Up, pos)
    }

    pub fn on_pointer_leave(&mut self, pos: Position) -> Option<Point> {
        self.on_pointer(PointerEvent::Leave, pos)
    }

    // --- Persistence ---

    /// Encode `{color, size, points}` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Encode`] if encoding fails.
    pub fn serialize(&self) -> Result<String, BoardError> {
        state::serialize(&StateView { color: &self.tool.color, size: self.tool.size, points: &self.points })
    }

    /// Load a persisted snapshot and merge it into the live log.
    ///
    /// The snapshot's tool settings replace the current ones, its points are
    /// appended after the existing ones (not substituted), and the merged log
    /// is redrawn onto a cleared surface. On error nothing is changed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Parse`] for malformed JSON, or
    /// [`BoardError::MalformedStroke`] when the strict policy rejects the
    /// loaded points.
    pub fn load_state(&mut self, raw: Option<&str>) -> Result<(), BoardError> {
        let loaded = state::deserialize(raw, &self.config)?;
        if self.config.stroke_policy == StrokePolicy::Strict {
            loaded
                .points
                .validate()
                .inspect_err(|e| warn!("rejected persisted strokes: {e}"))?;
        }
        debug!(
            "loading state: color={} size={} points={} (existing {})",
            loaded.color,
            loaded.size,
            loaded.points.len(),
            self.points.len()
        );
        self.tool = ToolState::new(loaded.color, loaded.size);
        self.points.append(loaded.points);
        self.redraw();
        Ok(())
    }

    /// Erase everything and reset the tool to the configured defaults.
    pub fn clear_board(&mut self) {
        self.surface.clear();
        self.points.clear();
        self.set_size(f64::from(self.config.default_size()));
        let color = self.config.default_color().to_owned();
        self.set_color(&color);
        debug!("board cleared");
    }

    /// Write the snapshot under the configured key, removing it first.
    ///
    /// # Errors
    ///
    /// Returns encoding or storage failures.
    pub fn save<T: StateStore + ?Sized>(&self, storage: &mut T) -> Result<(), BoardError> {
        let raw = self.serialize()?;
        store::replace(storage, &self.config.storage_key, &raw)?;
        debug!("saved {} points under '{}'", self.points.len(), self.config.storage_key);
        Ok(())
    }

    /// Load whatever is stored under the configured key (startup path).
    ///
    /// # Errors
    ///
    /// Returns storage failures and the errors of [`EngineCore::load_state`].
    pub fn restore<T: StateStore + ?Sized>(&mut self, storage: &T) -> Result<(), BoardError> {
        let raw = storage.get(&self.config.storage_key)?;
        self.load_state(raw.as_deref())
    }

    /// React to a storage change made by another browsing context.
    ///
    /// Returns `Ok(true)` when `key` is the configured state key and the new
    /// value was loaded; other keys (and a `None` key, i.e. storage cleared)
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`EngineCore::load_state`].
    pub fn on_storage_change(&mut self, key: Option<&str>, new_value: Option<&str>) -> Result<bool, BoardError> {
        if key != Some(self.config.storage_key.as_str()) {
            return Ok(false);
        }
        self.load_state(new_value)?;
        Ok(true)
    }

    // --- Queries ---

    #[must_use]
    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    #[must_use]
    pub fn points(&self) -> &StrokeLog {
        &self.points
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// The browser engine. Wraps `EngineCore` over the canvas element's 2D context.
pub struct Engine {
    core: EngineCore<CanvasSurface>,
}

impl Engine {
    /// Bind to `canvas`, acquiring its 2D context.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Surface`] if the context cannot be obtained.
    pub fn new(canvas: HtmlCanvasElement, config: BoardConfig) -> Result<Self, BoardError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| BoardError::Surface(format!("{e:?}")))?
            .ok_or_else(|| BoardError::Surface("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BoardError::Surface("2d context has an unexpected type".into()))?;
        Ok(Self { core: EngineCore::new(CanvasSurface::new(canvas, ctx), config) })
    }

    /// Convert viewport client coordinates to surface coordinates.
    #[must_use]
    pub fn surface_position(&self, client_x: f64, client_y: f64) -> Position {
        let canvas = self.core.surface().canvas();
        Position::new(
            client_x - f64::from(canvas.offset_left()),
            client_y - f64::from(canvas.offset_top()),
        )
    }

    /// Feed a pointer event given in client coordinates.
    pub fn on_pointer(&mut self, event: PointerEvent, client_x: f64, client_y: f64) -> Option<Point> {
        let pos = self.surface_position(client_x, client_y);
        self.core.on_pointer(event, pos)
    }

    // --- Delegated operations ---

    pub fn set_color(&mut self, color: &str) {
        self.core.set_color(color);
    }

    pub fn set_size(&mut self, size: f64) {
        self.core.set_size(size);
    }

    pub fn clear_board(&mut self) {
        self.core.clear_board();
    }

    /// # Errors
    ///
    /// See [`EngineCore::save`].
    pub fn save<T: StateStore + ?Sized>(&self, storage: &mut T) -> Result<(), BoardError> {
        self.core.save(storage)
    }

    /// # Errors
    ///
    /// See [`EngineCore::restore`].
    pub fn restore<T: StateStore + ?Sized>(&mut self, storage: &T) -> Result<(), BoardError> {
        self.core.restore(storage)
    }

    /// # Errors
    ///
    /// See [`EngineCore::on_storage_change`].
    pub fn on_storage_change(&mut self, key: Option<&str>, new_value: Option<&str>) -> Result<bool, BoardError> {
        self.core.on_storage_change(key, new_value)
    }

    #[must_use]
    pub fn tool(&self) -> &ToolState {
        self.core.tool()
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        self.core.config()
    }
}
