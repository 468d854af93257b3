//! Video detail page: embedded player plus the reader comment thread.
//!
//! Videos share the article ID space; only the rendering differs, so the
//! fetch plumbing is borrowed from the article page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_panel::CommentPanel;
use crate::net::types::Article;
use crate::pages::article::{fetch_on_id_change, parse_article_id};
use crate::util::youtube;

#[component]
pub fn VideoPage() -> impl IntoView {
    let params = use_params_map();
    let article_id = Signal::derive(move || parse_article_id(params.read().get("id")));
    let video = RwSignal::new(None::<Article>);

    fetch_on_id_change(article_id, video);

    let embed = move || {
        video
            .get()
            .and_then(|v| v.youtube_url)
            .and_then(|url| youtube::embed_url(&url))
    };

    view! {
        <div class="video-page">
            <a class="video-page__back" href="/">"← PitchSide"</a>
            <Show
                when=move || video.get().is_some()
                fallback=move || view! { <p class="video-page__loading">"Loading video..."</p> }
            >
                {move || {
                    video
                        .get()
                        .map(|v| {
                            view! {
                                <h1 class="video-page__title">{v.title}</h1>
                            }
                        })
                }}
                <Show
                    when=move || embed().is_some()
                    fallback=move || {
                        view! { <p class="video-page__unavailable">"This video is unavailable."</p> }
                    }
                >
                    <iframe
                        class="video-page__player"
                        src=move || embed().unwrap_or_default()
                        title="Video player"
                        allowfullscreen=true
                    ></iframe>
                </Show>
            </Show>
            <CommentPanel article_id=article_id comment_type="regular".to_owned()/>
        </div>
    }
}
