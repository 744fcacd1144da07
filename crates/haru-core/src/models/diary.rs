//! Diary model and request payloads

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a diary entry.
///
/// Integral on the wire; `Display`/`FromStr` allow it to travel through
/// route segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiaryId(i64);

impl DiaryId {
    /// Get the raw integer value of this ID
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for DiaryId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DiaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DiaryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Mood recorded alongside a diary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Joy,
    Sadness,
    Anger,
    Tired,
    Annoyed,
    Calm,
}

impl Mood {
    /// Every mood the server accepts, in display order.
    pub const ALL: [Self; 6] = [
        Self::Joy,
        Self::Sadness,
        Self::Anger,
        Self::Tired,
        Self::Annoyed,
        Self::Calm,
    ];

    /// Wire value of this mood
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Tired => "tired",
            Self::Annoyed => "annoyed",
            Self::Calm => "calm",
        }
    }

    /// Human-readable label for the mood picker
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Joy => "Joy",
            Self::Sadness => "Sadness",
            Self::Anger => "Anger",
            Self::Tired => "Tired",
            Self::Annoyed => "Annoyed",
            Self::Calm => "Calm",
        }
    }
}

impl FromStr for Mood {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or(())
    }
}

/// A diary entry as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diary {
    /// Unique identifier
    pub id: DiaryId,
    /// Entry title
    pub title: String,
    /// Entry body text
    pub content: String,
    /// Mood recorded for the day, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Diary {
    /// First characters of the body for list previews, truncated to
    /// `max_len` characters.
    #[must_use]
    pub fn preview(&self, max_len: usize) -> String {
        let mut preview: String = self.content.chars().take(max_len).collect();
        if self.content.chars().count() > max_len {
            preview.push('…');
        }
        preview
    }

    /// Check if both title and body are empty (whitespace-only counts)
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

/// Payload for creating a new diary entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiaryDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

/// Partial update payload for PATCH requests.
///
/// Absent fields are left untouched by the server, so `None` values are
/// not serialized at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiaryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

impl DiaryPatch {
    /// Whether this patch would change anything at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.mood.is_none()
    }
}

/// Paging and filtering for the diary list endpoint.
///
/// Ordering and paging are fully delegated to the server; the client only
/// forwards the offsets it was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub skip: u32,
    pub limit: u32,
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 10,
            search: None,
        }
    }
}

impl ListQuery {
    /// Query-string pairs for the list request
    #[must_use]
    pub fn as_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("skip", self.skip.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_diary(content: &str) -> Diary {
        Diary {
            id: DiaryId::from(7),
            title: "A day".to_string(),
            content: content.to_string(),
            mood: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn diary_id_round_trips_through_route_segments() {
        let id: DiaryId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn preview_truncates_on_character_boundaries() {
        let diary = sample_diary("오늘은 날씨가 좋았다");
        assert_eq!(diary.preview(3), "오늘은…");
        assert_eq!(sample_diary("short").preview(100), "short");
    }

    #[test]
    fn patch_serialization_omits_unset_fields() {
        let patch = DiaryPatch {
            content: Some("rewritten".to_string()),
            ..DiaryPatch::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({ "content": "rewritten" }));
    }

    #[test]
    fn mood_uses_lowercase_wire_values() {
        assert_eq!(serde_json::to_value(Mood::Joy).unwrap(), "joy");
        assert_eq!("tired".parse::<Mood>().unwrap(), Mood::Tired);
        assert!("grumpy".parse::<Mood>().is_err());
    }

    #[test]
    fn diary_deserializes_without_mood() {
        let diary: Diary = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "First entry",
            "content": "Started a new notebook.",
            "created_at": "2025-06-11T10:00:00Z",
            "updated_at": "2025-06-11T10:00:00Z",
        }))
        .unwrap();
        assert_eq!(diary.mood, None);
        assert!(!diary.is_blank());
    }

    #[test]
    fn list_query_pairs_include_search_only_when_set() {
        let query = ListQuery::default();
        assert_eq!(
            query.as_pairs(),
            vec![("skip", "0".to_string()), ("limit", "10".to_string())]
        );

        let query = ListQuery {
            search: Some("rain".to_string()),
            ..ListQuery::default()
        };
        assert!(query
            .as_pairs()
            .contains(&("search", "rain".to_string())));
    }
}
