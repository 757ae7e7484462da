//! Input model: pointer events and the drawing gesture state machine.
//!
//! `Idle → down → Stroking → move* → up → Idle`. Each transition reports the
//! [`PointKind`] the engine should record, or `None` when the event does not
//! contribute to a stroke. Leaving the surface while stroking closes the
//! stroke the same way a pointer-up does.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::stroke::PointKind;

/// A pointer position in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer event kinds the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down,
    Move,
    Up,
    /// The pointer left the surface.
    Leave,
}

/// Drawing gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No stroke in progress.
    #[default]
    Idle,
    /// A stroke has begun and not yet ended.
    Stroking,
}

impl InputState {
    /// Apply a pointer event and return the kind of point to record, if any.
    ///
    /// A second `Down` while already stroking starts a fresh stroke; the
    /// previous one is left open.
    pub fn transition(&mut self, event: PointerEvent) -> Option<PointKind> {
        match (*self, event) {
            (_, PointerEvent::Down) => {
                *self = Self::Stroking;
                Some(PointKind::Begin)
            }
            (Self::Stroking, PointerEvent::Move) => Some(PointKind::Move),
            (Self::Stroking, PointerEvent::Up | PointerEvent::Leave) => {
                *self = Self::Idle;
                Some(PointKind::End)
            }
            (Self::Idle, PointerEvent::Move | PointerEvent::Up | PointerEvent::Leave) => None,
        }
    }
}
