use super::*;

#[test]
fn post_body_attaches_the_parent_article() {
    let draft = CommentDraft {
        name: "A".to_owned(),
        comment: "hi".to_owned(),
        comment_type: "regular".to_owned(),
    };
    let payload = new_comment_from_draft(5, &draft);
    assert_eq!(payload.article_id, 5);
    assert_eq!(payload.name, "A");
    assert_eq!(payload.comment, "hi");
    assert_eq!(payload.comment_type, "regular");
}

#[test]
fn post_body_serializes_the_documented_shape() {
    let draft = CommentDraft {
        name: "A".to_owned(),
        comment: "hi".to_owned(),
        comment_type: "regular".to_owned(),
    };
    let value = serde_json::to_value(new_comment_from_draft(5, &draft)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "article_id": 5,
            "name": "A",
            "comment": "hi",
            "comment_type": "regular"
        })
    );
}
