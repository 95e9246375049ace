//! Error types for the volume info core
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Volume Error Enum ==
/// Error raised while querying a volume's free/total space.
///
/// Never propagated past the refresher: a failed query is recorded as an
/// unknown (-1) quantity and still cached, so a persistently failing volume
/// does not get re-queried on every tick.
#[derive(Error, Debug)]
pub enum VolumeError {
    /// I/O failure while reading volume space
    #[error("volume query failed: {0}")]
    Query(#[from] std::io::Error),
}

// == Editor Error Enum ==
/// Error raised while selecting a file editor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The user declined an editor's warning prompt
    #[error("editor selection cancelled")]
    Cancelled,
}

// == Result Type Alias ==
/// Convenience Result type for volume operations.
pub type Result<T> = std::result::Result<T, VolumeError>;
