//! Player button availability

use serde::{Deserialize, Serialize};

/// Which transport buttons the player surface should enable
///
/// Nothing is enabled without a current episode. Shuffle and loop are
/// pointless for a single-episode queue, so they are disabled there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerControls {
    /// Play/pause button
    pub play: bool,

    /// Previous button
    pub previous: bool,

    /// Next button
    pub next: bool,

    /// Shuffle toggle
    pub shuffle: bool,

    /// Loop toggle
    pub repeat: bool,

    /// Seek slider
    pub seek: bool,
}

impl PlayerControls {
    /// Derive availability from queue facts
    pub fn evaluate(queue_len: usize, has_next: bool, has_previous: bool) -> Self {
        if queue_len == 0 {
            return Self::default();
        }

        let multiple = queue_len > 1;
        Self {
            play: true,
            previous: has_previous,
            next: has_next,
            shuffle: multiple,
            repeat: multiple,
            seek: true,
        }
    }
}
