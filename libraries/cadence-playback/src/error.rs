//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// Transport and queue operations never fail; they no-op on invalid input.
/// Errors only come from constructing a manager with a bad configuration.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
