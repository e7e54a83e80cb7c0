//! WASM bindings for podcastr-playback
//!
//! Lets the web player drive a [`PlaybackSession`](crate::PlaybackSession)
//! from JavaScript, with an `<audio>` element behind the output callbacks.

#[cfg(feature = "wasm")]
pub mod output;

#[cfg(feature = "wasm")]
pub mod session;

#[cfg(feature = "wasm")]
pub mod types;

#[cfg(feature = "wasm")]
pub use output::JsAudioOutput;

#[cfg(feature = "wasm")]
pub use session::WasmPlaybackSession;

#[cfg(feature = "wasm")]
pub use types::WasmEpisode;
