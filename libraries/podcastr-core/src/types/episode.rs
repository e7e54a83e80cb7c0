//! Episode domain type

use crate::format::format_duration;
use crate::types::EpisodeId;
use chrono::{DateTime, Locale, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Podcast episode
///
/// Produced by the episode data service and handed to the player as-is.
/// The player stores episodes but never edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique episode identifier
    pub id: EpisodeId,

    /// Episode title
    pub title: String,

    /// Participants, already joined for display
    pub members: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Audio duration in whole seconds
    pub duration_secs: u64,

    /// Playable audio URL
    pub url: String,

    /// Publication date
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    /// Show notes (HTML as delivered by the data service)
    #[serde(default)]
    pub description: Option<String>,
}

impl Episode {
    /// Create a new episode with the fields the player needs
    pub fn new(
        id: impl Into<EpisodeId>,
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        duration_secs: u64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            duration_secs,
            url: url.into(),
            published_at: None,
            description: None,
        }
    }

    /// Set the publication date
    #[must_use]
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Set the show notes
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Duration as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// Duration formatted as `HH:MM:SS`
    pub fn duration_label(&self) -> String {
        format_duration(self.duration_secs)
    }

    /// Publication date as the listing shows it, in pt-BR (`8 jan 21`)
    pub fn published_label(&self) -> Option<String> {
        self.published_at
            .map(|date| date.format_localized("%-d %b %y", Locale::pt_BR).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Episode {
        Episode::new(
            "a-importancia-da-contribuicao-em-open-source",
            "A importância da contribuição em Open Source",
            "Diego e Richard",
            "https://cdn/opensource.jpg",
            3981,
            "https://cdn/opensource.m4a",
        )
    }

    #[test]
    fn duration_helpers() {
        let episode = sample();
        assert_eq!(episode.duration(), Duration::from_secs(3981));
        assert_eq!(episode.duration_label(), "01:06:21");
    }

    #[test]
    fn published_label_uses_short_date() {
        let date = Utc.with_ymd_and_hms(2021, 1, 8, 16, 0, 0).unwrap();
        let episode = sample().with_published_at(date);
        assert_eq!(episode.published_label().as_deref(), Some("8 jan 21"));

        let april = Utc.with_ymd_and_hms(2021, 4, 23, 9, 0, 0).unwrap();
        let episode = sample().with_published_at(april);
        assert_eq!(episode.published_label().as_deref(), Some("23 abr 21"));
        assert_eq!(sample().published_label(), None);
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{
            "id": "faladev-30",
            "title": "Como virar líder",
            "members": "Tiago, Diego e Pellizzetti",
            "thumbnail": "https://cdn/lider.jpg",
            "duration_secs": 3000,
            "url": "https://cdn/lider.m4a"
        }"#;

        let episode: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.id.as_str(), "faladev-30");
        assert!(episode.published_at.is_none());
        assert!(episode.description.is_none());
    }
}
