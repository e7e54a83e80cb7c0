//! Core traits for Podcastr

use crate::error::Result;
use crate::types::{Episode, EpisodeId};

/// Episode data service
///
/// The external source of episode metadata. Failures are surfaced to the
/// calling view layer; the player only ever receives well-formed `Episode`
/// values.
#[allow(async_fn_in_trait)]
pub trait EpisodeService: Send + Sync {
    /// Fetch the episode listing, newest first
    async fn fetch_episode_list(&self) -> Result<Vec<Episode>>;

    /// Fetch a single episode for its detail page
    async fn fetch_episode_by_id(&self, id: &EpisodeId) -> Result<Episode>;
}
