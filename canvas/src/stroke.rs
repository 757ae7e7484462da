//! Stroke model: recorded points, the ordered stroke log, and sequence rules.
//!
//! A stroke is a `Begin` point, zero or more `Move` points, and a closing
//! `End` point. Each point carries the rendered line width and stroke color
//! that were active on the surface when it was captured, so replaying the log
//! reproduces the drawing exactly even if tool settings changed mid-stroke.
//!
//! The log itself never enforces the begin/move/end sequence. Whether a
//! malformed sequence is accepted is decided by [`StrokePolicy`] at load time.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Role of a point within its stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "serde_json::Value")]
pub enum PointKind {
    /// Starts a new path; moves the cursor without drawing.
    Begin,
    /// Extends the current path with a straight segment.
    #[default]
    Move,
    /// Finishes the current path.
    End,
}

impl From<serde_json::Value> for PointKind {
    /// Anything but the `"begin"` and `"end"` strings is a `Move`, whatever its JSON type.
    fn from(raw: serde_json::Value) -> Self {
        match raw.as_str() {
            Some("begin") => Self::Begin,
            Some("end") => Self::End,
            _ => Self::Move,
        }
    }
}

/// A single recorded sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position in surface pixels.
    pub x: f64,
    /// Vertical position in surface pixels.
    pub y: f64,
    /// Rendered line width at capture time (half the brush size).
    pub size: f64,
    /// Stroke color at capture time, as the surface reported it.
    pub color: String,
    /// Role of this point within its stroke.
    #[serde(rename = "type", default)]
    pub kind: PointKind,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64, size: f64, color: impl Into<String>, kind: PointKind) -> Self {
        Self { x, y, size, color: color.into(), kind }
    }
}

/// Whether stroke logs loaded from storage must satisfy the sequence rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokePolicy {
    /// Replay whatever was loaded, in order.
    #[default]
    Permissive,
    /// Reject logs with a `Move`/`End` outside a stroke or a nested `Begin`.
    Strict,
}

/// Ordered log of recorded points. Insertion order is drawing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeLog {
    points: Vec<Point>,
}

impl StrokeLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point and return a reference to it.
    pub fn push(&mut self, point: Point) -> &Point {
        self.points.push(point);
        let last = self.points.len() - 1;
        &self.points[last]
    }

    /// Append every point of `other`, preserving order.
    pub fn append(&mut self, other: StrokeLog) {
        self.points.extend(other.points);
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check the begin/move/end sequence.
    ///
    /// A trailing stroke without an `End` is accepted: a log saved mid-gesture
    /// is still replayable.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MalformedStroke`] at the first offending point.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut open = false;
        for (index, point) in self.points.iter().enumerate() {
            let reason = match (point.kind, open) {
                (PointKind::Begin, true) => Some("begin inside an open stroke"),
                (PointKind::Move, false) => Some("move outside a stroke"),
                (PointKind::End, false) => Some("end without a matching begin"),
                _ => None,
            };
            if let Some(reason) = reason {
                return Err(BoardError::MalformedStroke { index, kind: point.kind, reason });
            }
            open = point.kind != PointKind::End;
        }
        Ok(())
    }
}

impl From<Vec<Point>> for StrokeLog {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a StrokeLog {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
