//! Playback Events
//!
//! Two directions of traffic:
//! - [`OutputEvent`]: lifecycle notifications reported by the audio output
//!   and fed into the session
//! - [`SessionEvent`]: changes the session emits for UI synchronization,
//!   collected until the host drains them

use crate::types::SessionPhase;
use serde::{Deserialize, Serialize};

/// Notifications from the audio output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputEvent {
    /// Source metadata loaded; playback can start
    Ready {
        /// Duration reported by the output, whole seconds
        duration_secs: u64,
    },

    /// Periodic playback position report
    TimeUpdate {
        /// Current position, whole seconds
        position_secs: u64,
    },

    /// Source played to the end
    Ended,

    /// Output started playing on its own (media keys, autoplay)
    Started,

    /// Output paused on its own (media keys, headphones unplugged)
    Paused,
}

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Coarse state changed
    StateChanged {
        /// The new phase
        phase: SessionPhase,
    },

    /// A different episode became current (or the same one was reloaded)
    EpisodeChanged {
        /// ID of the new current episode
        episode_id: String,
        /// ID of the episode that was current before, if any
        previous_episode_id: Option<String>,
    },

    /// Queue was replaced
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Queue was emptied
    QueueCleared,

    /// Play flag changed while idle, where the phase cannot show it
    PlayingChanged {
        /// New value
        is_playing: bool,
    },

    /// Loop flag flipped
    LoopChanged {
        /// New value
        enabled: bool,
    },

    /// Shuffle flag flipped
    ShuffleChanged {
        /// New value
        enabled: bool,
    },

    /// Position update
    ProgressUpdate {
        /// Current position, whole seconds
        position_secs: u64,
        /// Current episode duration, whole seconds
        duration_secs: u64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether output is muted
        is_muted: bool,
    },
}
