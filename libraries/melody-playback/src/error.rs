//! Error types for playback

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// The output primitive rejected an operation
    ///
    /// These are transient by contract (autoplay policy, network stall);
    /// the engine swallows them and retries on the next explicit play.
    #[error("Output error: {0}")]
    Output(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
