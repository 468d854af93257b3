//! Home page hosting the featured media gallery.

use leptos::prelude::*;

use crate::components::media_gallery::MediaGallery;
use crate::net::api::ApiClient;
use crate::net::types::MediaSections;

/// Landing route: fetches the featured sections once and hands them to the
/// gallery. A failed fetch renders an empty gallery rather than an error.
#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let sections = RwSignal::new(None::<MediaSections>);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api.fetch_featured().await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(fetched) => sections.set(Some(fetched)),
                Err(e) => {
                    log::error!("featured media fetch failed: {e}");
                    sections.set(Some(MediaSections::default()));
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &api;

    view! {
        <div class="home-page">
            <header class="home-page__masthead">
                <h1>"PitchSide"</h1>
                <p class="home-page__tagline">"Cricket news, videos, and fixtures"</p>
                <nav class="home-page__nav">
                    <a href="/admin/agents">"Admin"</a>
                </nav>
            </header>
            <Show
                when=move || sections.get().is_some()
                fallback=move || view! { <p class="home-page__loading">"Loading featured media..."</p> }
            >
                {move || sections.get().map(|fetched| view! { <MediaGallery sections=fetched/> })}
            </Show>
        </div>
    }
}
