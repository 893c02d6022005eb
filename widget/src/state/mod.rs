//! Client-side widget state.
//!
//! DESIGN
//! ======
//! State is split by concern so the panel can depend on small focused
//! models: `conversation` owns the message exchange, `shell` owns whether
//! the launcher or the panel is showing.

pub mod conversation;
pub mod shell;
