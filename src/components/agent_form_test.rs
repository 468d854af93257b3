use super::*;

#[test]
fn draft_from_copies_an_existing_record_exactly() {
    let record = AgentConfig {
        name: "ipl-fixtures".to_owned(),
        description: "IPL schedule".to_owned(),
        schedule_source: ScheduleSource::Espncricinfo,
        schedule_days: 21,
        fetch_mode: FetchMode::Next,
        is_active: false,
        ..AgentConfig::default()
    };
    assert_eq!(draft_from(Some(&record)), record);
}

#[test]
fn draft_from_uses_defaults_in_create_mode() {
    let draft = draft_from(None);
    assert_eq!(draft, AgentConfig::default());
    assert_eq!(draft.agent_type, "cricket_schedule");
}

#[test]
fn out_of_range_days_pass_through_unmodified() {
    // The widget enforces [1, 30]; the form itself never clamps, so a
    // programmatic 45 survives to the save callback.
    assert_eq!(parse_schedule_days("45", 7), 45);
    assert_eq!(parse_schedule_days("0", 7), 0);
}

#[test]
fn mid_edit_input_keeps_the_previous_value() {
    assert_eq!(parse_schedule_days("", 7), 7);
    assert_eq!(parse_schedule_days("abc", 12), 12);
    assert_eq!(parse_schedule_days(" 14 ", 7), 14);
}
