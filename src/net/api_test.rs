use super::*;

#[test]
fn comments_endpoint_formats_documented_path() {
    let api = ApiClient::default();
    assert_eq!(
        api.comments_endpoint(5, "regular"),
        "/api/articles/5/comments?comment_type=regular"
    );
}

#[test]
fn post_comment_endpoint_omits_query() {
    let api = ApiClient::default();
    assert_eq!(api.post_comment_endpoint(5), "/api/articles/5/comments");
}

#[test]
fn article_endpoint_formats_detail_path() {
    let api = ApiClient::default();
    assert_eq!(api.article_endpoint(12), "/api/articles/12");
}

#[test]
fn featured_endpoint_is_fixed() {
    let api = ApiClient::default();
    assert_eq!(api.featured_endpoint(), "/api/media/featured");
}

#[test]
fn agent_endpoints_cover_create_and_update() {
    let api = ApiClient::default();
    assert_eq!(api.agents_endpoint(), "/api/agents");
    assert_eq!(api.agent_endpoint("ipl-fixtures"), "/api/agents/ipl-fixtures");
}

#[test]
fn explicit_origin_prefixes_every_endpoint() {
    let api = ApiClient::new("https://api.pitchside.example");
    assert_eq!(
        api.comments_endpoint(5, "regular"),
        "https://api.pitchside.example/api/articles/5/comments?comment_type=regular"
    );
    assert_eq!(api.featured_endpoint(), "https://api.pitchside.example/api/media/featured");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("comments", 500), "comments request failed: 500");
    assert_eq!(request_failed_message("agent save", 422), "agent save request failed: 422");
}
