//! Display formatting for server timestamps.
//!
//! Comment and publication times render in the site's home timezone (IST)
//! regardless of the reader's locale; the value is display-only and never
//! written back.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, FixedOffset, Utc};

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Format a server timestamp as e.g. `01 May 2024, 6:04 PM IST`.
pub fn format_display_timestamp(ts: &DateTime<Utc>) -> String {
    let Some(ist) = FixedOffset::east_opt(IST_OFFSET_SECS) else {
        return ts.to_rfc3339();
    };
    ts.with_timezone(&ist)
        .format("%d %b %Y, %-I:%M %p IST")
        .to_string()
}
