//! Comment authoring modal.
//!
//! The hosting panel owns the field signals so a rejected submission keeps
//! the reader's draft intact; the modal only normalizes the draft and hands
//! it back through `on_submit`.

#[cfg(test)]
#[path = "comment_modal_test.rs"]
mod comment_modal_test;

use leptos::prelude::*;

/// What the modal hands back on submit; the panel adds the article ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentDraft {
    pub name: String,
    pub comment: String,
    pub comment_type: String,
}

/// Trim the draft fields and require both before a submit goes out.
fn build_draft(name: &str, comment: &str, comment_type: &str) -> Option<CommentDraft> {
    let name = name.trim();
    let comment = comment.trim();
    if name.is_empty() || comment.is_empty() {
        return None;
    }
    Some(CommentDraft {
        name: name.to_owned(),
        comment: comment.to_owned(),
        comment_type: comment_type.to_owned(),
    })
}

/// Modal dialog for writing a new comment.
#[component]
pub fn CommentModal(
    name: RwSignal<String>,
    body: RwSignal<String>,
    error: RwSignal<Option<String>>,
    #[prop(into)] submitting: Signal<bool>,
    comment_type: String,
    on_submit: Callback<CommentDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        if submitting.get_untracked() {
            return;
        }
        let Some(draft) = build_draft(&name.get_untracked(), &body.get_untracked(), &comment_type) else {
            return;
        };
        on_submit.run(draft);
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--comment"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Add Comment"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        disabled=move || submitting.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Comment"
                    <textarea
                        class="dialog__input dialog__input--multiline"
                        rows="4"
                        prop:value=move || body.get()
                        disabled=move || submitting.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if submitting.get() { "Posting..." } else { "Post Comment" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
