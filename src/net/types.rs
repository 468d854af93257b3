//! Wire DTOs for the PitchSide REST API.
//!
//! DESIGN
//! ======
//! These types mirror backend payloads field for field so serde round-trips
//! stay lossless; view-layer concerns (thumbnails, routes, display strings)
//! are derived elsewhere.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminator on a media item determining its detail route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    #[default]
    Article,
}

/// A media list entry as supplied to the gallery.
///
/// Transient: owned by the caller, never mutated by the view layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: i64,
    pub title: String,
    /// Full provider URL when the item is a video.
    #[serde(default)]
    pub youtube_url: Option<String>,
    /// Editorial image used when no provider thumbnail can be derived.
    #[serde(default)]
    pub image_url: Option<String>,
    pub content_type: ContentType,
}

/// The two featured-media sections keyed by gallery category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaSections {
    #[serde(default)]
    pub videos: Vec<MediaItem>,
    #[serde(default)]
    pub news: Vec<MediaItem>,
}

/// Full detail-page payload for an article or video.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub content_type: ContentType,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// A reader comment. Identity and timestamps are owned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub name: String,
    pub comment: String,
    /// Category tag partitioning comment threads per article.
    pub comment_type: String,
    pub created_at: DateTime<Utc>,
}

/// POST body for creating a comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub article_id: i64,
    pub name: String,
    pub comment: String,
    pub comment_type: String,
}

/// Site the schedule agent scrapes fixtures from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleSource {
    #[default]
    Cricbuzz,
    Espncricinfo,
    Icc,
}

impl ScheduleSource {
    pub const ALL: [Self; 3] = [Self::Cricbuzz, Self::Espncricinfo, Self::Icc];

    /// Stable wire/form value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cricbuzz => "cricbuzz",
            Self::Espncricinfo => "espncricinfo",
            Self::Icc => "icc",
        }
    }

    /// Parse a form value back into a source; unknown values are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Human label for select options.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cricbuzz => "Cricbuzz",
            Self::Espncricinfo => "ESPNcricinfo",
            Self::Icc => "ICC",
        }
    }
}

/// How much of the schedule one agent run fetches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    #[default]
    Full,
    Next,
}

impl FetchMode {
    pub const ALL: [Self; 2] = [Self::Full, Self::Next];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Next => "next",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "Full schedule",
            Self::Next => "Next fixture only",
        }
    }
}

/// A configured scraping-agent record as edited by the admin form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub description: String,
    pub agent_type: String,
    pub schedule_source: ScheduleSource,
    /// Days of fixtures to cover per run. The form widget bounds this to
    /// [1, 30]; the record itself carries whatever the caller saved.
    pub schedule_days: u32,
    pub fetch_mode: FetchMode,
    pub is_active: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            agent_type: "cricket_schedule".to_owned(),
            schedule_source: ScheduleSource::default(),
            schedule_days: 7,
            fetch_mode: FetchMode::default(),
            is_active: true,
        }
    }
}

/// `GET .../comments` response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

/// `POST .../comments` response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentEnvelope {
    pub comment: Comment,
}

/// `GET /api/articles/{id}` response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticleEnvelope {
    pub article: Article,
}

/// `GET /api/agents` response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentsResponse {
    pub agents: Vec<AgentConfig>,
}

/// `POST`/`PUT` agent save response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentEnvelope {
    pub agent: AgentConfig,
}
