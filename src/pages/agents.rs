//! Admin screen for the cricket-schedule scraping agents.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form component stays persistence-agnostic; this page supplies the
//! save handler, owns the busy flag the form receives as `is_loading`, and
//! keeps the agent inventory current after each save.

#[cfg(test)]
#[path = "agents_test.rs"]
mod agents_test;

use leptos::prelude::*;

use crate::components::agent_form::AgentForm;
use crate::net::api::ApiClient;
use crate::net::types::AgentConfig;
use crate::state::agents::AgentAdminState;

/// One-line list summary for an agent card.
fn agent_summary(agent: &AgentConfig) -> String {
    format!(
        "{} · every {} days · {}",
        agent.schedule_source.label(),
        agent.schedule_days,
        agent.fetch_mode.label()
    )
}

#[component]
pub fn AgentAdminPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let state = RwSignal::new(AgentAdminState {
        loading: true,
        ..AgentAdminState::default()
    });

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api.fetch_agents().await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(agents) => state.update(|s| {
                    s.agents = agents;
                    s.loading = false;
                }),
                Err(e) => {
                    log::error!("agents fetch failed: {e}");
                    state.update(|s| {
                        s.loading = false;
                        s.error = Some(e);
                    });
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &api;

    let selected = Signal::derive(move || state.get().selected().cloned());

    let on_select = move |name: String| {
        state.update(|s| {
            s.error = None;
            s.editing = Some(name);
        });
    };
    let on_new = move |_| {
        state.update(|s| {
            s.error = None;
            s.editing = None;
        });
    };
    let on_cancel = Callback::new(move |()| {
        state.update(|s| {
            s.error = None;
            s.editing = None;
        });
    });

    let on_save = Callback::new(move |agent: AgentConfig| {
        if state.get_untracked().saving {
            return;
        }
        let original = state.get_untracked().editing.clone();
        state.update(|s| {
            s.saving = true;
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.save_agent(&agent, original.as_deref()).await {
                    Ok(saved) => state.update(|s| {
                        s.saving = false;
                        let name = saved.name.clone();
                        s.upsert(saved, original.as_deref());
                        s.editing = Some(name);
                    }),
                    Err(e) => state.update(|s| {
                        s.saving = false;
                        s.error = Some(e);
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (agent, original);
        }
    });

    view! {
        <div class="agents-page">
            <header class="agents-page__header">
                <a class="agents-page__back" href="/">"← PitchSide"</a>
                <h1>"Schedule Agents"</h1>
                <button class="btn agents-page__new" on:click=on_new>
                    "+ New Agent"
                </button>
            </header>

            <Show when=move || state.get().error.is_some()>
                <p class="agents-page__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>

            <div class="agents-page__columns">
                <Show
                    when=move || !state.get().loading
                    fallback=move || view! { <p>"Loading agents..."</p> }
                >
                    <ul class="agents-page__list">
                        {move || {
                            state
                                .get()
                                .agents
                                .into_iter()
                                .map(|agent| {
                                    let name = agent.name.clone();
                                    let is_selected = {
                                        let name = name.clone();
                                        move || state.get().editing.as_deref() == Some(name.as_str())
                                    };
                                    view! {
                                        <li class="agents-page__item">
                                            <button
                                                class="agents-page__card"
                                                class:agents-page__card--active=is_selected
                                                class:agents-page__card--inactive=!agent.is_active
                                                on:click=move |_| on_select(name.clone())
                                            >
                                                <span class="agents-page__card-name">{agent.name.clone()}</span>
                                                <span class="agents-page__card-summary">{agent_summary(&agent)}</span>
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>

                <AgentForm
                    existing=selected
                    is_loading=Signal::derive(move || state.get().saving)
                    on_save=on_save
                    on_cancel=on_cancel
                />
            </div>
        </div>
    }
}
