//! Episode listing support
//!
//! The home page shows the newest episodes as "latest releases" cards and the
//! remainder in an "all episodes" table. Playing from either section queues
//! the whole listing in display order.

use crate::error::{CoreError, Result};
use crate::traits::EpisodeService;
use crate::types::{Episode, EpisodeId};
use std::cmp::Reverse;
use tracing::debug;

/// Number of episodes shown as latest releases
pub const DEFAULT_LATEST_COUNT: usize = 2;

/// Number of episodes requested for the listing page
pub const DEFAULT_LISTING_LIMIT: usize = 12;

/// Listing split into latest releases and the remaining episodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeCatalog {
    latest: Vec<Episode>,
    remaining: Vec<Episode>,
}

impl EpisodeCatalog {
    /// Split a listing (already ordered newest first)
    ///
    /// The first `latest_count` episodes become latest releases. A listing
    /// shorter than `latest_count` produces an empty remainder.
    pub fn split(mut episodes: Vec<Episode>, latest_count: usize) -> Self {
        let remaining = episodes.split_off(latest_count.min(episodes.len()));
        Self {
            latest: episodes,
            remaining,
        }
    }

    /// Latest releases
    pub fn latest(&self) -> &[Episode] {
        &self.latest
    }

    /// Episodes after the latest releases
    pub fn remaining(&self) -> &[Episode] {
        &self.remaining
    }

    /// Total number of episodes
    pub fn len(&self) -> usize {
        self.latest.len() + self.remaining.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty() && self.remaining.is_empty()
    }

    /// Whole listing in display order, suitable as a play queue
    pub fn playback_list(&self) -> Vec<Episode> {
        self.latest
            .iter()
            .chain(self.remaining.iter())
            .cloned()
            .collect()
    }

    /// Position of an episode within `playback_list`
    pub fn position_of(&self, id: &EpisodeId) -> Option<usize> {
        self.latest
            .iter()
            .chain(self.remaining.iter())
            .position(|episode| &episode.id == id)
    }
}

/// Episode service backed by a fixed set of episodes
///
/// Stands in for the remote API in tests and offline builds.
#[derive(Debug, Clone)]
pub struct InMemoryEpisodeService {
    episodes: Vec<Episode>,
    listing_limit: usize,
}

impl InMemoryEpisodeService {
    /// Create a service over the given episodes
    pub fn new(episodes: Vec<Episode>) -> Self {
        Self {
            episodes,
            listing_limit: DEFAULT_LISTING_LIMIT,
        }
    }

    /// Override how many episodes the listing returns
    #[must_use]
    pub fn with_listing_limit(mut self, limit: usize) -> Self {
        self.listing_limit = limit;
        self
    }

    /// Load episodes from a JSON array
    pub fn from_json(json: &str) -> Result<Self> {
        let episodes: Vec<Episode> = serde_json::from_str(json)?;
        if let Some(bad) = episodes.iter().find(|episode| episode.url.is_empty()) {
            return Err(CoreError::invalid_data(format!(
                "episode {} has no audio url",
                bad.id
            )));
        }
        Ok(Self::new(episodes))
    }
}

impl EpisodeService for InMemoryEpisodeService {
    async fn fetch_episode_list(&self) -> Result<Vec<Episode>> {
        let mut episodes = self.episodes.clone();
        // Undated episodes sort after every dated one
        episodes.sort_by_key(|episode| Reverse(episode.published_at));
        episodes.truncate(self.listing_limit);

        debug!(
            "Listing {} of {} episodes",
            episodes.len(),
            self.episodes.len()
        );
        Ok(episodes)
    }

    async fn fetch_episode_by_id(&self, id: &EpisodeId) -> Result<Episode> {
        self.episodes
            .iter()
            .find(|episode| &episode.id == id)
            .cloned()
            .ok_or_else(|| CoreError::EpisodeNotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str) -> Episode {
        Episode::new(
            id,
            format!("Episode {id}"),
            "Host",
            format!("https://cdn/{id}.jpg"),
            600,
            format!("https://cdn/{id}.mp3"),
        )
    }

    #[test]
    fn split_takes_latest_from_front() {
        let catalog = EpisodeCatalog::split(vec![episode("a"), episode("b"), episode("c")], 2);

        let latest: Vec<_> = catalog.latest().iter().map(|e| e.id.as_str()).collect();
        let remaining: Vec<_> = catalog.remaining().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(latest, ["a", "b"]);
        assert_eq!(remaining, ["c"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn split_short_listing() {
        let catalog = EpisodeCatalog::split(vec![episode("a")], DEFAULT_LATEST_COUNT);
        assert_eq!(catalog.latest().len(), 1);
        assert!(catalog.remaining().is_empty());

        let empty = EpisodeCatalog::split(Vec::new(), DEFAULT_LATEST_COUNT);
        assert!(empty.is_empty());
    }

    #[test]
    fn playback_list_keeps_display_order() {
        let catalog = EpisodeCatalog::split(
            vec![episode("a"), episode("b"), episode("c"), episode("d")],
            2,
        );

        let ids: Vec<_> = catalog
            .playback_list()
            .into_iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
        assert_eq!(catalog.position_of(&EpisodeId::new("c")), Some(2));
        assert_eq!(catalog.position_of(&EpisodeId::new("z")), None);
    }

    #[test]
    fn from_json_rejects_missing_url() {
        let json = r#"[{"id":"x","title":"X","members":"","thumbnail":"","duration_secs":1,"url":""}]"#;
        let err = InMemoryEpisodeService::from_json(json).unwrap_err();
        assert!(matches!(err, CoreError::InvalidData(_)));
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = InMemoryEpisodeService::from_json("[{").unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }
}
