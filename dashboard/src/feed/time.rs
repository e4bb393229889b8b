//! Relative time formatting

use chrono::{DateTime, Utc};

/// Format a timestamp relative to `now`: "Just now" under a minute,
/// then minutes, hours, days. Pure function of the two timestamps; future
/// timestamps clamp to "Just now".
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = now.signed_duration_since(timestamp).num_milliseconds().max(0);
    let minutes = diff_ms / 60_000;
    let hours = diff_ms / 3_600_000;
    let days = diff_ms / 86_400_000;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", days)
    }
}
