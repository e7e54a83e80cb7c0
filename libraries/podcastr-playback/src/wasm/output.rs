//! Audio output backed by JavaScript callbacks

use crate::AudioOutput;
use js_sys::Function;
use std::time::Duration;
use wasm_bindgen::JsValue;

/// Forwards output commands to JS functions
///
/// Unset callbacks are skipped, and exceptions thrown by a callback are
/// dropped: commands are fire-and-forget.
#[derive(Default)]
pub struct JsAudioOutput {
    pub(crate) on_load: Option<Function>,
    pub(crate) on_play: Option<Function>,
    pub(crate) on_pause: Option<Function>,
    pub(crate) on_seek: Option<Function>,
    pub(crate) on_volume: Option<Function>,
}

fn call0(callback: Option<&Function>) {
    if let Some(cb) = callback {
        cb.call0(&JsValue::NULL).ok();
    }
}

fn call1(callback: Option<&Function>, arg: &JsValue) {
    if let Some(cb) = callback {
        cb.call1(&JsValue::NULL, arg).ok();
    }
}

impl AudioOutput for JsAudioOutput {
    fn load(&mut self, url: &str) {
        call1(self.on_load.as_ref(), &JsValue::from_str(url));
    }

    fn play(&mut self) {
        call0(self.on_play.as_ref());
    }

    fn pause(&mut self) {
        call0(self.on_pause.as_ref());
    }

    fn seek(&mut self, position: Duration) {
        call1(self.on_seek.as_ref(), &JsValue::from_f64(position.as_secs_f64()));
    }

    fn set_volume(&mut self, gain: f32) {
        call1(self.on_volume.as_ref(), &JsValue::from_f64(f64::from(gain)));
    }
}
