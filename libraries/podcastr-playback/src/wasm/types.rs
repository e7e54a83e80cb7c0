//! WASM-compatible type definitions

use podcastr_core::Episode;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// WASM-compatible episode
///
/// Mirrors the JSON the pages already hold, with camelCase field names.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[wasm_bindgen]
pub struct WasmEpisode {
    id: String,
    title: String,
    members: String,
    thumbnail: String,
    duration: f64,
    url: String,
}

#[wasm_bindgen]
impl WasmEpisode {
    /// Create a new episode
    #[wasm_bindgen(constructor)]
    pub fn new(
        id: String,
        title: String,
        members: String,
        thumbnail: String,
        duration: f64,
        url: String,
    ) -> Self {
        Self {
            id,
            title,
            members,
            thumbnail,
            duration,
            url,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn members(&self) -> String {
        self.members.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn thumbnail(&self) -> String {
        self.thumbnail.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[wasm_bindgen(getter)]
    pub fn url(&self) -> String {
        self.url.clone()
    }
}

impl From<WasmEpisode> for Episode {
    fn from(episode: WasmEpisode) -> Self {
        // JS numbers; negative or NaN durations collapse to 0
        let duration_secs = if episode.duration.is_finite() && episode.duration > 0.0 {
            episode.duration as u64
        } else {
            0
        };

        Episode::new(
            episode.id,
            episode.title,
            episode.members,
            episode.thumbnail,
            duration_secs,
            episode.url,
        )
    }
}

impl From<&Episode> for WasmEpisode {
    fn from(episode: &Episode) -> Self {
        Self {
            id: episode.id.to_string(),
            title: episode.title.clone(),
            members: episode.members.clone(),
            thumbnail: episode.thumbnail.clone(),
            duration: episode.duration_secs as f64,
            url: episode.url.clone(),
        }
    }
}
