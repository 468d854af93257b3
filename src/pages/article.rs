//! Article detail page with the reader comment thread.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_panel::CommentPanel;
use crate::net::api::ApiClient;
use crate::net::types::Article;
use crate::util::time::format_display_timestamp;

/// Route param → article ID. Unparseable IDs collapse to 0, which the
/// backend treats as not found.
pub(crate) fn parse_article_id(raw: Option<String>) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or_default()
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params_map();
    let article_id = Signal::derive(move || parse_article_id(params.read().get("id")));
    let article = RwSignal::new(None::<Article>);

    fetch_on_id_change(article_id, article);

    view! {
        <div class="article-page">
            <a class="article-page__back" href="/">"← PitchSide"</a>
            <Show
                when=move || article.get().is_some()
                fallback=move || view! { <p class="article-page__loading">"Loading article..."</p> }
            >
                {move || {
                    article
                        .get()
                        .map(|a| {
                            let published = a.published_at.map(|ts| format_display_timestamp(&ts));
                            view! {
                                <article class="article-page__body">
                                    <h1>{a.title}</h1>
                                    <Show when={
                                        let published = published.clone();
                                        move || published.is_some()
                                    }>
                                        <p class="article-page__published">
                                            {published.clone().unwrap_or_default()}
                                        </p>
                                    </Show>
                                    {a.image_url
                                        .map(|src| view! { <img class="article-page__image" src=src alt=""/> })}
                                    <p class="article-page__text">{a.body.unwrap_or_default()}</p>
                                </article>
                            }
                        })
                }}
            </Show>
            <CommentPanel article_id=article_id comment_type="regular".to_owned()/>
        </div>
    }
}

/// Fetch the article whenever the route ID changes; stale responses after
/// teardown are dropped.
pub(crate) fn fetch_on_id_change(article_id: Signal<i64>, article: RwSignal<Option<Article>>) {
    let api = expect_context::<ApiClient>();
    let last_fetched = RwSignal::new(None::<i64>);
    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));

    {
        #[cfg(feature = "hydrate")]
        let alive = alive.clone();
        #[cfg(feature = "hydrate")]
        let api = api.clone();
        Effect::new(move || {
            let id = article_id.get();
            if last_fetched.get() == Some(id) {
                return;
            }
            last_fetched.set(Some(id));
            article.set(None);

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let result = api.fetch_article(id).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(fetched) => article.set(Some(fetched)),
                        Err(e) => log::error!("article fetch failed: {e}"),
                    }
                });
            }
        });
    }

    #[cfg(feature = "hydrate")]
    on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    #[cfg(not(feature = "hydrate"))]
    let _ = &api;
}
