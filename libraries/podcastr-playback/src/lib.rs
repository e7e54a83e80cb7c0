//! Podcastr - Playback Session
//!
//! The player's controller: one object that owns the play queue and the
//! transport state, and keeps an external audio output in step.
//!
//! This crate provides:
//! - Queue replacement (single episode or a listing from an index)
//! - Play/pause, sequential and shuffled next/previous, loop
//! - End-of-episode handling (advance, restart when looping, or go idle)
//! - Position tracking and seeking
//! - Volume (logarithmic, 0-100%, mute/unmute)
//! - Player button availability
//! - Event queue for UI synchronization
//!
//! # Architecture
//!
//! `podcastr-playback` renders no audio and fetches no data:
//! - Audio is commanded through the [`AudioOutput`] trait
//! - Output lifecycle reports come back as [`OutputEvent`]s
//! - Episodes come from [`podcastr_core::EpisodeService`] via the pages
//!
//! Everything runs synchronously on the host's event loop.
//!
//! # Example: Listing Playback
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::{NullOutput, OutputEvent, PlaybackSession};
//!
//! let episodes = vec![
//!     Episode::new("ep-1", "Episode 1", "Ana", "https://cdn/1.jpg", 1200, "https://cdn/1.mp3"),
//!     Episode::new("ep-2", "Episode 2", "Bruno", "https://cdn/2.jpg", 900, "https://cdn/2.mp3"),
//! ];
//!
//! let mut session = PlaybackSession::new(NullOutput);
//! session.play_from_list(episodes, 0).unwrap();
//! assert!(session.has_next());
//!
//! // The output reports the first episode finished
//! session.handle_output_event(OutputEvent::Ended);
//! assert_eq!(session.current_index(), 1);
//!
//! // Last episode finished: back to idle
//! session.handle_output_event(OutputEvent::Ended);
//! assert!(session.queue().is_empty());
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust
//! use podcastr_playback::{AudioOutput, PlaybackSession};
//! use std::time::Duration;
//!
//! // Implement AudioOutput for your platform
//! #[derive(Default)]
//! struct ElementOutput {
//!     src: Option<String>,
//!     paused: bool,
//! }
//!
//! impl AudioOutput for ElementOutput {
//!     fn load(&mut self, url: &str) {
//!         self.src = Some(url.to_string());
//!     }
//!
//!     fn play(&mut self) {
//!         self.paused = false;
//!     }
//!
//!     fn pause(&mut self) {
//!         self.paused = true;
//!     }
//!
//!     fn seek(&mut self, _position: Duration) {}
//!
//!     fn set_volume(&mut self, _gain: f32) {}
//! }
//!
//! let mut session = PlaybackSession::new(ElementOutput::default());
//! # use podcastr_core::Episode;
//! session.play_single(Episode::new("ep", "Ep", "Host", "", 60, "https://cdn/ep.mp3"));
//! assert_eq!(session.output().src.as_deref(), Some("https://cdn/ep.mp3"));
//!
//! session.toggle_play();
//! assert!(session.output().paused);
//! ```

mod controls;
mod error;
pub mod events;
mod output;
mod picker;
mod progress;
mod session;
pub mod types;
mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use controls::PlayerControls;
pub use error::{PlaybackError, Result};
pub use events::{OutputEvent, SessionEvent};
pub use output::{AudioOutput, NullOutput};
pub use picker::{IndexPicker, RandomPicker, SeededPicker};
pub use progress::Progress;
pub use session::PlaybackSession;
pub use types::{PlaybackConfig, PlaybackFlags, SessionPhase, SessionSnapshot};
pub use volume::Volume;
