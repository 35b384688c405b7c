#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Multi-turn conversation support for the bike-purchase assistant.
//!
//! Each turn runs the full advisory pipeline: extract preferences from the
//! user's message, merge them into the session, rank the catalog, and compose
//! a reply through the configured LLM provider. Provider failures never abort
//! a turn; the manager falls back to a deterministic reply built from the
//! recommendations it already computed.

mod manager;
mod session;

pub use manager::{ConversationConfig, ConversationError, ConversationManager, TurnOutcome, WELCOME};
pub use session::ConversationSession;
