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

//! LLM provider implementations for reply composition.
//!
//! The assistant talks to any OpenAI-compatible chat-completions endpoint
//! through [`OpenAiProvider`]. Transient request failures are retried on a
//! short fixed schedule sized for interactive use.

mod openai;
mod retry;

pub use openai::OpenAiProvider;
pub use retry::retry_with_backoff;
