//! Error types for the playback session

use std::time::Duration;
use thiserror::Error;

/// Playback errors
///
/// Transport commands issued against an empty queue are not errors; they
/// simply have no effect on the queue.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// `play_from_list` was given an index outside the list
    #[error("Invalid index {index} for list of {len} episodes")]
    InvalidIndex {
        /// Requested index
        index: usize,
        /// Length of the rejected list
        len: usize,
    },

    /// Seek target lies past the end of the current episode
    #[error("Invalid seek position: {0:?}")]
    InvalidSeekPosition(Duration),

    /// Configuration could not be parsed
    #[error("Invalid playback config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
