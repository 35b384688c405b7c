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

//! Bike catalog and preference-driven ranking.
//!
//! A static in-memory inventory plus the functions that turn an
//! accumulated [`PreferenceRecord`](bikefinder_core::PreferenceRecord)
//! into an ordered shortlist: hard-constraint filtering, additive soft
//! scoring, and stable ranking with a fallback to the full catalog so
//! recommendations are never empty while the catalog isn't.

mod data;
mod item;
mod ranking;

pub use data::catalog;
pub use item::Bike;
pub use ranking::{DEFAULT_LIMIT, filter, rank, score};
