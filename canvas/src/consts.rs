//! Shared defaults for the canvas crate.

// ── Tool panels ─────────────────────────────────────────────────

/// Colors offered by the palette panel. The first entry is the default.
pub const PALETTE: [&str; 5] = ["black", "green", "blue", "yellow", "brown"];

/// Brush sizes offered by the brushes panel. The first entry is the default.
pub const BRUSH_SIZES: [u32; 3] = [10, 15, 20];

// ── Rendering ───────────────────────────────────────────────────

/// Brush size is divided by this to get the rendered line width.
pub const LINE_WIDTH_DIVISOR: f64 = 2.0;

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the persisted snapshot.
pub const STATE_KEY: &str = "state";
