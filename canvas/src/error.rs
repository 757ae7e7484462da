//! Crate error type.

use crate::stroke::PointKind;

/// Errors surfaced by the engine, the snapshot codec and storage backends.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The persisted snapshot is not valid JSON or has the wrong shape.
    #[error("failed to parse persisted state: {0}")]
    Parse(#[source] serde_json::Error),
    /// The snapshot could not be encoded.
    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
    /// A stroke log violates the begin/move/end sequence under the strict policy.
    #[error("malformed stroke at point {index} ({kind:?}): {reason}")]
    MalformedStroke { index: usize, kind: PointKind, reason: &'static str },
    /// A configuration value could not be parsed.
    #[error("invalid board config: {0}")]
    Config(String),
    /// The drawing surface could not be acquired.
    #[error("surface unavailable: {0}")]
    Surface(String),
    /// The storage backend rejected a read or write.
    #[error("storage error: {0}")]
    Storage(String),
}
