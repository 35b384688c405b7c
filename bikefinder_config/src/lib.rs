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

//! Configuration for the bikefinder CLI.
//!
//! Config lives at `~/bikefinder/config.json`. Every field has a default, so
//! a partial or absent file still yields a working setup; `OPENAI_API_KEY`,
//! `OPENAI_MODEL`, and `OPENAI_BASE_URL` override whatever the file says.

mod schema;

pub use schema::{AssistantConfig, Config, OpenAiConfig, ProvidersConfig};
