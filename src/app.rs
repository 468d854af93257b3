//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::ApiClient;
use crate::pages::{agents::AgentAdminPage, article::ArticlePage, home::HomePage, video::VideoPage};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI state and the REST client (carrying the backend
/// origin as explicit configuration) and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    provide_context(ApiClient::from_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/pitchside.css"/>
        <Title text="PitchSide"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("article"), ParamSegment("id")) view=ArticlePage/>
                <Route path=(StaticSegment("video"), ParamSegment("id")) view=VideoPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("agents")) view=AgentAdminPage/>
            </Routes>
        </Router>
    }
}
