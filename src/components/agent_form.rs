//! Agent configuration form for the admin screen.
//!
//! DESIGN
//! ======
//! A pure controlled draft editor: every input writes the local draft, and
//! submission hands the whole draft to the caller's `on_save` untouched.
//! Persistence, validation policy, and error handling stay with the caller;
//! the only bounds here are the numeric widget's own min/max.

#[cfg(test)]
#[path = "agent_form_test.rs"]
mod agent_form_test;

use leptos::prelude::*;

use crate::net::types::{AgentConfig, FetchMode, ScheduleSource};

/// Bounds enforced by the schedule-days widget, not at submit time.
const SCHEDULE_DAYS_MIN: u32 = 1;
const SCHEDULE_DAYS_MAX: u32 = 30;

/// Initial draft: a copy of the record being edited, or defaults for
/// create mode.
fn draft_from(existing: Option<&AgentConfig>) -> AgentConfig {
    existing.cloned().unwrap_or_default()
}

/// Parse the numeric widget's value, keeping the previous draft value while
/// the field is mid-edit (empty or non-numeric).
fn parse_schedule_days(raw: &str, previous: u32) -> u32 {
    raw.trim().parse().unwrap_or(previous)
}

/// Controlled form editing one agent record.
#[component]
pub fn AgentForm(
    #[prop(into)] existing: Signal<Option<AgentConfig>>,
    #[prop(into)] is_loading: Signal<bool>,
    on_save: Callback<AgentConfig>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(draft_from(existing.get_untracked().as_ref()));

    // Reload the draft only when a different record is loaded into the form.
    // The memo keeps unrelated parent re-renders (e.g. the busy flag
    // flipping during a save) from wiping in-progress edits.
    let existing = Memo::new(move |_| existing.get());
    Effect::new(move || {
        let record = existing.get();
        draft.set(draft_from(record.as_ref()));
    });

    let update_mode = move || existing.get().is_some();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        on_save.run(draft.get_untracked());
    };

    view! {
        <form class="agent-form" on:submit=on_submit>
            <label class="agent-form__label">
                "Name"
                <input
                    class="agent-form__input"
                    type="text"
                    placeholder="e.g. ipl-fixtures"
                    prop:value=move || draft.get().name
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </label>
            <label class="agent-form__label">
                "Description"
                <textarea
                    class="agent-form__input"
                    rows="3"
                    prop:value=move || draft.get().description
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="agent-form__label">
                "Agent Type"
                <select
                    class="agent-form__input"
                    prop:value=move || draft.get().agent_type
                    on:change=move |ev| draft.update(|d| d.agent_type = event_target_value(&ev))
                >
                    <option value="cricket_schedule">"Cricket Schedule"</option>
                </select>
            </label>
            <label class="agent-form__label">
                "Schedule Source"
                <select
                    class="agent-form__input"
                    prop:value=move || draft.get().schedule_source.as_str().to_owned()
                    on:change=move |ev| {
                        draft
                            .update(|d| {
                                if let Some(source) = ScheduleSource::parse(&event_target_value(&ev)) {
                                    d.schedule_source = source;
                                }
                            });
                    }
                >
                    {ScheduleSource::ALL
                        .into_iter()
                        .map(|source| view! { <option value=source.as_str()>{source.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="agent-form__label">
                "Schedule Days"
                <input
                    class="agent-form__input"
                    type="number"
                    min=SCHEDULE_DAYS_MIN.to_string()
                    max=SCHEDULE_DAYS_MAX.to_string()
                    prop:value=move || draft.get().schedule_days.to_string()
                    on:input=move |ev| {
                        draft
                            .update(|d| {
                                d.schedule_days = parse_schedule_days(&event_target_value(&ev), d.schedule_days);
                            });
                    }
                />
            </label>
            <label class="agent-form__label">
                "Fetch Mode"
                <select
                    class="agent-form__input"
                    prop:value=move || draft.get().fetch_mode.as_str().to_owned()
                    on:change=move |ev| {
                        draft
                            .update(|d| {
                                if let Some(mode) = FetchMode::parse(&event_target_value(&ev)) {
                                    d.fetch_mode = mode;
                                }
                            });
                    }
                >
                    {FetchMode::ALL
                        .into_iter()
                        .map(|mode| view! { <option value=mode.as_str()>{mode.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="agent-form__label agent-form__label--inline">
                <input
                    type="checkbox"
                    prop:checked=move || draft.get().is_active
                    on:change=move |ev| draft.update(|d| d.is_active = event_target_checked(&ev))
                />
                "Active"
            </label>
            <div class="agent-form__actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || is_loading.get()>
                    {move || {
                        if is_loading.get() {
                            "Saving..."
                        } else if update_mode() {
                            "Update Agent"
                        } else {
                            "Create Agent"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
