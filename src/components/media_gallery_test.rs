use super::*;

fn item(id: i64, content_type: ContentType) -> MediaItem {
    MediaItem {
        id,
        title: format!("item {id}"),
        youtube_url: None,
        image_url: None,
        content_type,
    }
}

#[test]
fn video_items_route_to_the_video_screen() {
    assert_eq!(detail_route(&item(1, ContentType::Video)), "/video/1");
}

#[test]
fn article_items_route_to_the_article_screen() {
    assert_eq!(detail_route(&item(2, ContentType::Article)), "/article/2");
}

#[test]
fn items_for_selects_the_matching_section() {
    let sections = MediaSections {
        videos: vec![item(1, ContentType::Video)],
        news: vec![item(2, ContentType::Article), item(3, ContentType::Article)],
    };
    assert_eq!(items_for(&sections, MediaTab::Videos).len(), 1);
    assert_eq!(items_for(&sections, MediaTab::News).len(), 2);
    assert_eq!(items_for(&sections, MediaTab::News)[0].id, 2);
}

#[test]
fn items_for_empty_section_yields_no_cards() {
    let sections = MediaSections::default();
    assert!(items_for(&sections, MediaTab::Videos).is_empty());
}
