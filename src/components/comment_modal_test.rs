use super::*;

#[test]
fn build_draft_trims_and_carries_the_category() {
    let draft = build_draft("  A  ", " hi ", "regular").unwrap();
    assert_eq!(draft.name, "A");
    assert_eq!(draft.comment, "hi");
    assert_eq!(draft.comment_type, "regular");
}

#[test]
fn build_draft_requires_both_fields() {
    assert_eq!(build_draft("", "hi", "regular"), None);
    assert_eq!(build_draft("A", "   ", "regular"), None);
    assert_eq!(build_draft("   ", "", "regular"), None);
}
