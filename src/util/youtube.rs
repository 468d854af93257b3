//! YouTube thumbnail and embed URL derivation.
//!
//! Media items carry full provider URLs; the gallery needs the
//! provider-hosted thumbnail, which is keyed by the video ID. Only the two
//! URL shapes the backend actually stores are recognized; anything else
//! falls back to the item image or the fixed placeholder.

#[cfg(test)]
#[path = "youtube_test.rs"]
mod youtube_test;

use crate::net::types::MediaItem;

/// Served from the site's static assets; also used when a thumbnail image
/// fails to load.
pub const THUMBNAIL_PLACEHOLDER: &str = "/img/video-placeholder.jpg";

/// Extract the video ID from a `watch?v={id}` or `youtu.be/{id}` URL.
pub fn video_id(url: &str) -> Option<&str> {
    if let Some((_, rest)) = url.split_once("watch?v=") {
        let id = rest.split(['&', '#']).next().unwrap_or_default();
        return (!id.is_empty()).then_some(id);
    }
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        let id = rest.split(['?', '&', '#']).next().unwrap_or_default();
        return (!id.is_empty()).then_some(id);
    }
    None
}

/// Thumbnail for a media item: provider thumbnail when a video ID can be
/// derived, otherwise the editorial image, otherwise the placeholder.
pub fn thumbnail_url(item: &MediaItem) -> String {
    if let Some(id) = item.youtube_url.as_deref().and_then(video_id) {
        return format!("https://img.youtube.com/vi/{id}/mqdefault.jpg");
    }
    item.image_url
        .clone()
        .unwrap_or_else(|| THUMBNAIL_PLACEHOLDER.to_owned())
}

/// Embed-player URL for the video page, when the URL is a recognized shape.
pub fn embed_url(url: &str) -> Option<String> {
    video_id(url).map(|id| format!("https://www.youtube.com/embed/{id}"))
}
