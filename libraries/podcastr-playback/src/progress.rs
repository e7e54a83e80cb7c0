//! Position tracking for the current episode

use std::time::Duration;

/// Playback position within the current episode
///
/// Positions are whole seconds, matching what the player displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    position_secs: u64,
    duration_secs: u64,
}

impl Progress {
    /// Start tracking a freshly loaded episode
    pub fn start(duration_secs: u64) -> Self {
        Self {
            position_secs: 0,
            duration_secs,
        }
    }

    /// Record a position report from the output
    ///
    /// Reports past the end are held at the duration once it is known.
    pub fn update(&mut self, position_secs: u64) {
        self.position_secs = if self.duration_secs > 0 {
            position_secs.min(self.duration_secs)
        } else {
            position_secs
        };
    }

    /// Replace the duration with the one the output measured
    pub fn set_duration(&mut self, duration_secs: u64) {
        self.duration_secs = duration_secs;
        self.position_secs = self.position_secs.min(duration_secs);
    }

    /// Move back to the start
    pub fn rewind(&mut self) {
        self.position_secs = 0;
    }

    /// Current position, whole seconds
    pub fn position_secs(&self) -> u64 {
        self.position_secs
    }

    /// Current episode duration, whole seconds
    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    /// Current position
    pub fn position(&self) -> Duration {
        Duration::from_secs(self.position_secs)
    }

    /// Fraction played in `[0.0, 1.0]`; 0 when the duration is unknown
    pub fn fraction(&self) -> f64 {
        if self.duration_secs == 0 {
            0.0
        } else {
            self.position_secs as f64 / self.duration_secs as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_at_zero() {
        let progress = Progress::start(300);
        assert_eq!(progress.position_secs(), 0);
        assert_eq!(progress.duration_secs(), 300);
        assert_eq!(progress.fraction(), 0.0);
    }

    #[test]
    fn update_holds_at_duration() {
        let mut progress = Progress::start(300);
        progress.update(120);
        assert_eq!(progress.position(), Duration::from_secs(120));
        assert!((progress.fraction() - 0.4).abs() < 1e-9);

        progress.update(301);
        assert_eq!(progress.position_secs(), 300);
    }

    #[test]
    fn unknown_duration_accepts_any_position() {
        let mut progress = Progress::default();
        progress.update(42);
        assert_eq!(progress.position_secs(), 42);
        assert_eq!(progress.fraction(), 0.0);
    }

    #[test]
    fn measured_duration_replaces_metadata() {
        let mut progress = Progress::start(0);
        progress.update(90);
        progress.set_duration(60);
        assert_eq!(progress.duration_secs(), 60);
        assert_eq!(progress.position_secs(), 60);

        progress.rewind();
        assert_eq!(progress.position_secs(), 0);
    }
}
