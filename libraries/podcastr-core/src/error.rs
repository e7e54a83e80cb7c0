//! Core error types for Podcastr

use crate::types::EpisodeId;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Podcastr
#[derive(Error, Debug)]
pub enum CoreError {
    /// Episode not found
    #[error("Episode not found: {0}")]
    EpisodeNotFound(EpisodeId),

    /// The episode data source failed
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Episode data was present but unusable
    #[error("Invalid episode data: {0}")]
    InvalidData(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create an invalid data error
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}
