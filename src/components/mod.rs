//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render media, comment, and admin-form surfaces while reading
//! shared state from Leptos context providers; pages own route-scoped data
//! fetching and hand results down as props.

pub mod agent_form;
pub mod comment_modal;
pub mod comment_panel;
pub mod media_gallery;
