use super::*;
use chrono::TimeZone as _;

fn sample_comment(id: i64, name: &str) -> Comment {
    Comment {
        id,
        name: name.to_owned(),
        comment: "well bowled".to_owned(),
        comment_type: "regular".to_owned(),
        created_at: chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn default_state_is_idle_and_empty() {
    let state = CommentsState::default();
    assert!(state.comments.is_empty());
    assert!(!state.loading);
    assert!(!state.submitting);
}

#[test]
fn apply_fetched_replaces_thread_and_clears_loading() {
    let mut state = CommentsState {
        comments: vec![sample_comment(1, "old")],
        loading: true,
        submitting: false,
    };
    state.apply_fetched(vec![sample_comment(2, "A"), sample_comment(3, "B")]);
    assert_eq!(state.comments.len(), 2);
    assert_eq!(state.comments[0].id, 2);
    assert!(!state.loading);
}

#[test]
fn apply_fetch_error_leaves_empty_thread() {
    let mut state = CommentsState {
        comments: vec![sample_comment(1, "old")],
        loading: true,
        submitting: false,
    };
    state.apply_fetch_error();
    assert!(state.comments.is_empty());
    assert!(!state.loading);
}

#[test]
fn prepend_puts_server_record_first() {
    let mut state = CommentsState::default();
    state.apply_fetched(vec![sample_comment(1, "A")]);
    state.prepend(sample_comment(9, "B"));
    assert_eq!(state.comments[0].id, 9);
    assert_eq!(state.comments[1].id, 1);
}

#[test]
fn failed_submission_leaves_thread_unchanged() {
    // The panel never adds an optimistic entry, so a post failure only has
    // to reset the submitting flag.
    let mut state = CommentsState {
        comments: vec![sample_comment(1, "A")],
        loading: false,
        submitting: true,
    };
    let before = state.comments.clone();
    state.submitting = false;
    assert_eq!(state.comments, before);
    assert!(!state.submitting);
}
