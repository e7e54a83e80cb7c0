//! Audio output collaborator
//!
//! The session never renders sound itself. It issues fire-and-forget commands
//! to an `AudioOutput` (an `<audio>` element in the browser, a native player
//! elsewhere) and consumes the output's lifecycle notifications as
//! [`OutputEvent`](crate::events::OutputEvent) values.

use std::time::Duration;

/// Platform audio output
///
/// Commands return nothing: failures are the output's to report back through
/// its own events. Implementations are driven from a single thread, so no
/// `Send` bound is required.
pub trait AudioOutput {
    /// Replace the current source with the audio at `url`
    fn load(&mut self, url: &str);

    /// Start or resume playback of the loaded source
    fn play(&mut self);

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Jump to `position` from the start of the source
    fn seek(&mut self, position: Duration);

    /// Set output gain (0.0 = silent, 1.0 = unity)
    fn set_volume(&mut self, gain: f32);
}

/// Output that ignores every command
///
/// Useful for headless hosts and for driving the session purely through
/// events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOutput;

impl AudioOutput for NullOutput {
    fn load(&mut self, _url: &str) {}

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn seek(&mut self, _position: Duration) {}

    fn set_volume(&mut self, _gain: f32) {}
}

impl<T: AudioOutput + ?Sized> AudioOutput for Box<T> {
    fn load(&mut self, url: &str) {
        (**self).load(url);
    }

    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn seek(&mut self, position: Duration) {
        (**self).seek(position);
    }

    fn set_volume(&mut self, gain: f32) {
        (**self).set_volume(gain);
    }
}
