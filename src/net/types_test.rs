use super::*;
use chrono::TimeZone as _;

// =============================================================
// ContentType
// =============================================================

#[test]
fn content_type_serializes_lowercase() {
    assert_eq!(serde_json::json!(ContentType::Video), serde_json::json!("video"));
    assert_eq!(serde_json::json!(ContentType::Article), serde_json::json!("article"));
}

#[test]
fn content_type_default_is_article() {
    assert_eq!(ContentType::default(), ContentType::Article);
}

// =============================================================
// MediaItem / MediaSections
// =============================================================

#[test]
fn media_item_optional_urls_default_to_none() {
    let item: MediaItem = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "Ashes preview",
        "content_type": "article"
    }))
    .unwrap();
    assert_eq!(item.youtube_url, None);
    assert_eq!(item.image_url, None);
    assert_eq!(item.content_type, ContentType::Article);
}

#[test]
fn media_sections_missing_keys_deserialize_empty() {
    let sections: MediaSections = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(sections.videos.is_empty());
    assert!(sections.news.is_empty());
}

// =============================================================
// Comment
// =============================================================

#[test]
fn comment_round_trips_with_rfc3339_timestamp() {
    let comment: Comment = serde_json::from_value(serde_json::json!({
        "id": 42,
        "name": "A",
        "comment": "hi",
        "comment_type": "regular",
        "created_at": "2024-05-01T12:34:56Z"
    }))
    .unwrap();
    assert_eq!(comment.created_at, chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap());

    let value = serde_json::to_value(&comment).unwrap();
    let back: Comment = serde_json::from_value(value).unwrap();
    assert_eq!(back, comment);
}

// =============================================================
// ScheduleSource / FetchMode
// =============================================================

#[test]
fn schedule_source_form_values_round_trip() {
    for source in ScheduleSource::ALL {
        assert_eq!(ScheduleSource::parse(source.as_str()), Some(source));
    }
    assert_eq!(ScheduleSource::parse("howstat"), None);
}

#[test]
fn schedule_source_serializes_snake_case() {
    assert_eq!(
        serde_json::json!(ScheduleSource::Espncricinfo),
        serde_json::json!("espncricinfo")
    );
}

#[test]
fn fetch_mode_form_values_round_trip() {
    for mode in FetchMode::ALL {
        assert_eq!(FetchMode::parse(mode.as_str()), Some(mode));
    }
    assert_eq!(FetchMode::parse("partial"), None);
}

#[test]
fn fetch_mode_serializes_lowercase() {
    assert_eq!(serde_json::json!(FetchMode::Next), serde_json::json!("next"));
}

// =============================================================
// AgentConfig
// =============================================================

#[test]
fn agent_config_defaults_describe_create_mode() {
    let agent = AgentConfig::default();
    assert!(agent.name.is_empty());
    assert!(agent.description.is_empty());
    assert_eq!(agent.agent_type, "cricket_schedule");
    assert_eq!(agent.schedule_source, ScheduleSource::Cricbuzz);
    assert_eq!(agent.schedule_days, 7);
    assert_eq!(agent.fetch_mode, FetchMode::Full);
    assert!(agent.is_active);
}

#[test]
fn agent_config_round_trips() {
    let agent = AgentConfig {
        name: "ipl-fixtures".to_owned(),
        description: "IPL schedule".to_owned(),
        schedule_source: ScheduleSource::Icc,
        schedule_days: 30,
        fetch_mode: FetchMode::Next,
        is_active: false,
        ..AgentConfig::default()
    };
    let value = serde_json::to_value(&agent).unwrap();
    assert_eq!(value["schedule_source"], "icc");
    assert_eq!(value["fetch_mode"], "next");
    let back: AgentConfig = serde_json::from_value(value).unwrap();
    assert_eq!(back, agent);
}
