//! WASM-compatible PlaybackSession wrapper

use super::output::JsAudioOutput;
use super::types::WasmEpisode;
use crate::{OutputEvent, PlaybackConfig, PlaybackError, PlaybackSession, SessionPhase};
use js_sys::Function;
use podcastr_core::Episode;
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// WASM-compatible playback session
///
/// Commands from the page go in through the transport methods; `<audio>`
/// element events go in through the `notify*` methods. After every call the
/// session's pending events are handed to the `onChange` callback.
#[wasm_bindgen]
pub struct WasmPlaybackSession {
    inner: PlaybackSession<JsAudioOutput>,

    on_change: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlaybackSession {
    /// Create a new session
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            inner: PlaybackSession::with_config(JsAudioOutput::default(), PlaybackConfig::default()),
            on_change: None,
            on_error: None,
        }
    }

    // ===== Output Wiring =====

    /// Register the functions that drive the `<audio>` element
    #[wasm_bindgen(js_name = setOutput)]
    pub fn set_output(
        &mut self,
        load: Function,
        play: Function,
        pause: Function,
        seek: Function,
        volume: Function,
    ) {
        let output = self.inner.output_mut();
        output.on_load = Some(load);
        output.on_play = Some(play);
        output.on_pause = Some(pause);
        output.on_seek = Some(seek);
        output.on_volume = Some(volume);
    }

    // ===== Play Commands =====

    /// Play a single episode
    #[wasm_bindgen(js_name = playSingle)]
    pub fn play_single(&mut self, episode: WasmEpisode) {
        self.inner.play_single(episode.into());
        self.flush();
    }

    /// Play a list of episodes (JS array) from `index`
    #[wasm_bindgen(js_name = playFromList)]
    pub fn play_from_list(&mut self, list: JsValue, index: usize) -> Result<(), JsValue> {
        let episodes: Vec<WasmEpisode> = serde_wasm_bindgen::from_value(list)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episodes: {}", e)))?;
        let episodes: Vec<Episode> = episodes.into_iter().map(Episode::from).collect();

        self.inner
            .play_from_list(episodes, index)
            .map_err(|e| self.handle_error(e))?;
        self.flush();
        Ok(())
    }

    // ===== Transport =====

    /// Toggle play/pause
    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.inner.toggle_play();
        self.flush();
    }

    /// Toggle loop
    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&mut self) {
        self.inner.toggle_loop();
        self.flush();
    }

    /// Toggle shuffle
    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.inner.toggle_shuffle();
        self.flush();
    }

    /// Skip to next episode
    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) {
        self.inner.play_next();
        self.flush();
    }

    /// Go to previous episode
    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) {
        self.inner.play_previous();
        self.flush();
    }

    /// Empty the queue
    #[wasm_bindgen(js_name = clearPlayerState)]
    pub fn clear_player_state(&mut self) {
        self.inner.clear_player_state();
        self.flush();
    }

    /// Seek to position in seconds
    #[wasm_bindgen(js_name = seekTo)]
    pub fn seek_to(&mut self, position_secs: f64) -> Result<(), JsValue> {
        let position = Duration::from_secs(whole_seconds(position_secs));
        self.inner
            .seek(position)
            .map_err(|e| self.handle_error(e))?;
        self.flush();
        Ok(())
    }

    // ===== Volume Control =====

    /// Set volume (0-100)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: u8) {
        self.inner.set_volume(level);
        self.flush();
    }

    /// Toggle mute
    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&mut self) {
        self.inner.toggle_mute();
        self.flush();
    }

    // ===== Audio Element Events =====

    /// `loadedmetadata`
    #[wasm_bindgen(js_name = notifyReady)]
    pub fn notify_ready(&mut self, duration_secs: f64) {
        self.notify(OutputEvent::Ready {
            duration_secs: whole_seconds(duration_secs),
        });
    }

    /// `timeupdate`
    #[wasm_bindgen(js_name = notifyTimeUpdate)]
    pub fn notify_time_update(&mut self, position_secs: f64) {
        self.notify(OutputEvent::TimeUpdate {
            position_secs: whole_seconds(position_secs),
        });
    }

    /// `ended`
    #[wasm_bindgen(js_name = notifyEnded)]
    pub fn notify_ended(&mut self) {
        self.notify(OutputEvent::Ended);
    }

    /// `play`
    #[wasm_bindgen(js_name = notifyPlay)]
    pub fn notify_play(&mut self) {
        self.notify(OutputEvent::Started);
    }

    /// `pause`
    #[wasm_bindgen(js_name = notifyPause)]
    pub fn notify_pause(&mut self) {
        self.notify(OutputEvent::Paused);
    }

    // ===== State Queries =====

    /// Check if there is a next episode
    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Check if there is a previous episode
    #[wasm_bindgen(js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.inner.has_previous()
    }

    /// Current phase as string
    #[wasm_bindgen(js_name = getPhase)]
    pub fn get_phase(&self) -> String {
        match self.inner.phase() {
            SessionPhase::Idle => "idle".to_string(),
            SessionPhase::Paused => "paused".to_string(),
            SessionPhase::Playing => "playing".to_string(),
        }
    }

    /// Current episode, or `null`
    #[wasm_bindgen(js_name = currentEpisode)]
    pub fn current_episode(&self) -> Option<WasmEpisode> {
        self.inner.current_episode().map(WasmEpisode::from)
    }

    /// Full session snapshot as a JS object
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register change callback; receives an array of session events
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.on_change = Some(callback);
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal =====

    fn notify(&mut self, event: OutputEvent) {
        self.inner.handle_output_event(event);
        self.flush();
    }

    fn flush(&mut self) {
        let events = self.inner.drain_events();
        if events.is_empty() {
            return;
        }

        if let Some(ref cb) = self.on_change {
            if let Ok(js_events) = serde_wasm_bindgen::to_value(&events) {
                cb.call1(&JsValue::NULL, &js_events).ok();
            }
        }
    }

    fn handle_error(&self, error: PlaybackError) -> JsValue {
        let err_msg = error.to_string();

        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg)).ok();
        }

        JsValue::from_str(&err_msg)
    }
}

impl Default for WasmPlaybackSession {
    fn default() -> Self {
        Self::new()
    }
}

fn whole_seconds(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    }
}
