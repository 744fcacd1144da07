//! Diary card component

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use haru_core::Diary;

use crate::Route;

const PREVIEW_CHARS: usize = 100;

/// A single diary entry rendered as a card in the list view.
#[component]
pub fn DiaryCard(diary: Diary) -> Element {
    let preview = diary.preview(PREVIEW_CHARS);
    let updated = relative_time(diary.updated_at);

    rsx! {
        article { class: "diary-card",
            Link { to: Route::DiaryDetail { id: diary.id.value() },
                h2 { class: "diary-card-title", "{diary.title}" }
                p { class: "diary-card-preview", "{preview}" }
                p { class: "diary-card-meta",
                    if let Some(mood) = diary.mood {
                        span { class: "mood-badge", "{mood.label()}" }
                    }
                    span { "Updated {updated}" }
                }
            }
        }
    }
}

/// Compact "how long ago" label for timestamps.
pub fn relative_time(at: DateTime<Utc>) -> String {
    relative_time_from(at, Utc::now())
}

fn relative_time_from(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    if elapsed.num_seconds() < 60 {
        "just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        at.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        rfc3339.parse().unwrap()
    }

    #[test]
    fn recent_timestamps_use_relative_buckets() {
        let now = at("2025-06-11T12:00:00Z");
        assert_eq!(relative_time_from(at("2025-06-11T11:59:30Z"), now), "just now");
        assert_eq!(relative_time_from(at("2025-06-11T11:15:00Z"), now), "45m ago");
        assert_eq!(relative_time_from(at("2025-06-11T03:00:00Z"), now), "9h ago");
        assert_eq!(relative_time_from(at("2025-06-08T12:00:00Z"), now), "3d ago");
    }

    #[test]
    fn old_timestamps_fall_back_to_the_date() {
        let now = at("2025-06-11T12:00:00Z");
        assert_eq!(relative_time_from(at("2025-05-01T09:00:00Z"), now), "2025-05-01");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = at("2025-06-11T12:00:00Z");
        assert_eq!(relative_time_from(at("2025-06-11T12:05:00Z"), now), "just now");
    }
}
