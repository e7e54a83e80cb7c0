//! Core types for the playback session

use crate::controls::PlayerControls;
use crate::error::Result;
use podcastr_core::Episode;
use serde::{Deserialize, Serialize};

/// Transport flags
///
/// The three flags are independent; every combination is legal and none of
/// them is touched by queue replacement or clearing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackFlags {
    /// Audio should be playing
    pub is_playing: bool,

    /// Current episode restarts when it ends
    pub is_looping: bool,

    /// Next/previous pick a random queue position
    pub is_shuffling: bool,
}

/// Coarse session state, derived from the queue and `is_playing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Queue is empty
    Idle,

    /// Episode loaded, not playing
    Paused,

    /// Episode loaded and playing
    Playing,
}

/// Configuration for a playback session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 100)
    pub volume: u8,

    /// Initial loop flag (default: false)
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    pub shuffling: bool,

    /// Seed for shuffle picks; `None` uses the thread RNG
    pub shuffle_seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 100,
            looping: false,
            shuffling: false,
            shuffle_seed: None,
        }
    }
}

impl PlaybackConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Owned view of the session for renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Episodes in playback order
    pub queue: Vec<Episode>,

    /// Index of the current episode (0 when the queue is empty)
    pub current_index: usize,

    /// Episode at `current_index`, if any
    pub current_episode: Option<Episode>,

    /// Transport flags
    pub flags: PlaybackFlags,

    /// Coarse state
    pub phase: SessionPhase,

    /// Whether "next" is available
    pub has_next: bool,

    /// Whether "previous" is available
    pub has_previous: bool,

    /// Position in the current episode, whole seconds
    pub position_secs: u64,

    /// Duration of the current episode, whole seconds
    pub duration_secs: u64,

    /// Volume level (0-100)
    pub volume: u8,

    /// Whether output is muted
    pub muted: bool,

    /// Which player buttons are enabled
    pub controls: PlayerControls,
}
