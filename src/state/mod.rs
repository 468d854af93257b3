//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`ui`, `comments`, `agents`) so individual
//! components can depend on small focused models. Structs are plain data;
//! pages and components wrap them in `RwSignal`s.

pub mod agents;
pub mod comments;
pub mod ui;
