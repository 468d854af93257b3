//! Two-tab media gallery for the home page.
//!
//! DESIGN
//! ======
//! The gallery does not own its items; sections arrive fully formed from
//! the hosting page and the component only chooses which sequence to show.
//! The active tab lives in shared `UiState` and is persisted so the choice
//! survives navigation.

#[cfg(test)]
#[path = "media_gallery_test.rs"]
mod media_gallery_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::net::types::{ContentType, MediaItem, MediaSections};
use crate::state::ui::{MediaTab, UiState};
use crate::util::youtube;

/// Detail route for a media item: videos and articles have distinct screens.
fn detail_route(item: &MediaItem) -> String {
    match item.content_type {
        ContentType::Video => format!("/video/{}", item.id),
        ContentType::Article => format!("/article/{}", item.id),
    }
}

fn items_for(sections: &MediaSections, tab: MediaTab) -> Vec<MediaItem> {
    match tab {
        MediaTab::Videos => sections.videos.clone(),
        MediaTab::News => sections.news.clone(),
    }
}

/// Tabbed gallery over the two featured-media sections.
#[component]
pub fn MediaGallery(sections: MediaSections) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Restore the persisted tab once after hydration.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(tab) = crate::util::ui_persistence::load_media_tab() {
            ui.update(|u| u.active_media_tab = tab);
        }
    });

    let select_tab = move |tab: MediaTab| {
        ui.update(|u| u.active_media_tab = tab);
        crate::util::ui_persistence::save_media_tab(tab);
    };

    view! {
        <div class="media-gallery">
            <div class="media-gallery__tabs" role="tablist">
                {MediaTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="media-gallery__tab"
                                class:media-gallery__tab--active=move || ui.get().active_media_tab == tab
                                role="tab"
                                on:click=move |_| select_tab(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="media-gallery__grid">
                {move || {
                    items_for(&sections, ui.get().active_media_tab)
                        .into_iter()
                        .map(|item| view! { <MediaCard item=item/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// A clickable media card with thumbnail, kind badge, and title.
#[component]
fn MediaCard(item: MediaItem) -> impl IntoView {
    let href = detail_route(&item);
    let thumb = youtube::thumbnail_url(&item);
    let is_video = item.content_type == ContentType::Video;

    // Broken thumbnails swap to the placeholder instead of showing alt text.
    let on_error = move |ev: leptos::ev::ErrorEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(img) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok()) {
                img.set_src(youtube::THUMBNAIL_PLACEHOLDER);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <a class="media-card" href=href>
            <span class="media-card__frame">
                <img class="media-card__thumb" src=thumb alt=item.title.clone() on:error=on_error/>
                <Show when=move || is_video>
                    <span class="media-card__badge" aria-hidden="true">"▶"</span>
                </Show>
            </span>
            <span class="media-card__title">{item.title}</span>
        </a>
    }
}
