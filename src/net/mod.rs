//! Networking modules for the PitchSide REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared
//! with the backend.

pub mod api;
pub mod types;
