use super::*;
use crate::net::types::{FetchMode, ScheduleSource};

#[test]
fn agent_summary_reads_like_a_card_line() {
    let agent = AgentConfig {
        name: "ipl-fixtures".to_owned(),
        schedule_source: ScheduleSource::Espncricinfo,
        schedule_days: 14,
        fetch_mode: FetchMode::Next,
        ..AgentConfig::default()
    };
    assert_eq!(agent_summary(&agent), "ESPNcricinfo · every 14 days · Next fixture only");
}

#[test]
fn agent_summary_uses_defaults_for_new_records() {
    assert_eq!(agent_summary(&AgentConfig::default()), "Cricbuzz · every 7 days · Full schedule");
}
