//! Domain types for Podcastr

pub mod episode;
pub mod ids;

pub use episode::Episode;
pub use ids::EpisodeId;
