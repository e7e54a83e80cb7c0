//! Podcastr Core
//!
//! Episode domain types, formatting helpers and the data service contract
//! shared by the Podcastr listing pages and the player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Episode`, `EpisodeId`
//! - **Catalog**: splitting a listing into latest releases and the rest
//! - **Core Traits**: `EpisodeService` (the external episode data source)
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{format_duration, Episode, EpisodeCatalog};
//!
//! let episodes = vec![
//!     Episode::new("a", "Episode A", "Ana, Bruno", "https://cdn/a.jpg", 3600, "https://cdn/a.mp3"),
//!     Episode::new("b", "Episode B", "Carla", "https://cdn/b.jpg", 1800, "https://cdn/b.mp3"),
//!     Episode::new("c", "Episode C", "Diego", "https://cdn/c.jpg", 95, "https://cdn/c.mp3"),
//! ];
//!
//! let catalog = EpisodeCatalog::split(episodes, 2);
//! assert_eq!(catalog.latest().len(), 2);
//! assert_eq!(catalog.remaining().len(), 1);
//! assert_eq!(format_duration(95), "00:01:35");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod format;
pub mod traits;
pub mod types;

pub use catalog::{EpisodeCatalog, InMemoryEpisodeService, DEFAULT_LATEST_COUNT, DEFAULT_LISTING_LIMIT};
pub use error::{CoreError, Result};
pub use format::format_duration;
pub use traits::EpisodeService;
pub use types::{Episode, EpisodeId};
