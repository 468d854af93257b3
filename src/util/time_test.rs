use super::*;
use chrono::TimeZone as _;

#[test]
fn formats_fixed_ist_display_string() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap();
    assert_eq!(format_display_timestamp(&ts), "01 May 2024, 6:04 PM IST");
}

#[test]
fn morning_hours_render_without_zero_padding() {
    let ts = Utc.with_ymd_and_hms(2024, 12, 31, 21, 0, 0).unwrap();
    // 21:00 UTC + 05:30 rolls into the next day.
    assert_eq!(format_display_timestamp(&ts), "01 Jan 2025, 2:30 AM IST");
}

#[test]
fn midday_boundary_is_pm() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 6, 30, 0).unwrap();
    assert_eq!(format_display_timestamp(&ts), "01 May 2024, 12:00 PM IST");
}
