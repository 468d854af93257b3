//! Comment thread panel for article and video pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the thread for its (article, category) key, renders it newest
//! first, and hosts the authoring modal. The server owns comment identity;
//! after a successful post the returned record is prepended locally instead
//! of refetching the thread.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged and degrade to an empty thread with no
//! reader-visible error surface. Post failures surface inside the modal;
//! the thread itself is untouched because nothing optimistic was added.

#[cfg(test)]
#[path = "comment_panel_test.rs"]
mod comment_panel_test;

use leptos::prelude::*;

use crate::components::comment_modal::{CommentDraft, CommentModal};
use crate::net::api::ApiClient;
use crate::net::types::{Comment, NewComment};
use crate::state::comments::CommentsState;
use crate::util::time::format_display_timestamp;

/// Attach the parent article to a modal draft to form the POST body.
fn new_comment_from_draft(article_id: i64, draft: &CommentDraft) -> NewComment {
    NewComment {
        article_id,
        name: draft.name.clone(),
        comment: draft.comment.clone(),
        comment_type: draft.comment_type.clone(),
    }
}

/// Comment panel bound to one parent article and comment category.
#[component]
pub fn CommentPanel(#[prop(into)] article_id: Signal<i64>, comment_type: String) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let state = RwSignal::new(CommentsState {
        loading: true,
        ..CommentsState::default()
    });

    let show_modal = RwSignal::new(false);
    let draft_name = RwSignal::new(String::new());
    let draft_body = RwSignal::new(String::new());
    let submit_error = RwSignal::new(None::<String>);

    // One fetch per article key; re-issued when the route moves on. Pending
    // responses landing after teardown are dropped via the alive flag.
    let last_fetched = RwSignal::new(None::<i64>);
    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));

    {
        #[cfg(feature = "hydrate")]
        let api = api.clone();
        #[cfg(feature = "hydrate")]
        let comment_type = comment_type.clone();
        #[cfg(feature = "hydrate")]
        let alive = alive.clone();
        Effect::new(move || {
            let id = article_id.get();
            if last_fetched.get() == Some(id) {
                return;
            }
            last_fetched.set(Some(id));
            state.update(|s| s.loading = true);

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let comment_type = comment_type.clone();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let result = api.fetch_comments(id, &comment_type).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(comments) => state.update(|s| s.apply_fetched(comments)),
                        Err(e) => {
                            log::error!("comments fetch failed: {e}");
                            state.update(|s| s.apply_fetch_error());
                        }
                    }
                });
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let open_modal = move |_| {
        submit_error.set(None);
        show_modal.set(true);
    };
    let close_modal = Callback::new(move |()| show_modal.set(false));

    let on_submit = Callback::new({
        #[cfg(feature = "hydrate")]
        let alive = alive.clone();
        move |draft: CommentDraft| {
            if state.get_untracked().submitting {
                return;
            }
            state.update(|s| s.submitting = true);
            submit_error.set(None);
            let payload = new_comment_from_draft(article_id.get_untracked(), &draft);

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let result = api.post_comment(&payload).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(comment) => {
                            state.update(|s| {
                                s.prepend(comment);
                                s.submitting = false;
                            });
                            draft_name.set(String::new());
                            draft_body.set(String::new());
                            show_modal.set(false);
                        }
                        Err(e) => {
                            state.update(|s| s.submitting = false);
                            submit_error.set(Some(e));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = payload;
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = &api;

    let modal_comment_type = comment_type;
    view! {
        <section class="comment-panel">
            <header class="comment-panel__header">
                <h3>"Comments"</h3>
                <button
                    class="btn comment-panel__write"
                    disabled=move || state.get().submitting
                    on:click=open_modal
                >
                    "Write a Comment"
                </button>
            </header>
            <Show
                when=move || !state.get().loading
                fallback=move || view! { <p class="comment-panel__loading">"Loading comments..."</p> }
            >
                {move || {
                    let comments = state.get().comments;
                    if comments.is_empty() {
                        return view! {
                            <p class="comment-panel__empty">"No comments yet. Be the first!"</p>
                        }
                        .into_any();
                    }
                    comments
                        .into_iter()
                        .map(|comment| view! { <CommentRow comment=comment/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </Show>
            <Show when=move || show_modal.get()>
                <CommentModal
                    name=draft_name
                    body=draft_body
                    error=submit_error
                    submitting=Signal::derive(move || state.get().submitting)
                    comment_type=modal_comment_type.clone()
                    on_submit=on_submit
                    on_cancel=close_modal
                />
            </Show>
        </section>
    }
}

/// One rendered comment with author, fixed-zone timestamp, and body.
#[component]
fn CommentRow(comment: Comment) -> impl IntoView {
    let when = format_display_timestamp(&comment.created_at);
    view! {
        <article class="comment-panel__comment">
            <header class="comment-panel__meta">
                <span class="comment-panel__author">{comment.name}</span>
                <time class="comment-panel__time">{when}</time>
            </header>
            <p class="comment-panel__body">{comment.comment}</p>
        </article>
    }
}
