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

//! Keyword and pattern based extraction of buyer preferences.
//!
//! One utterance goes in, a partial [`PreferenceRecord`] comes out.
//! Everything here is a deterministic substring/regex heuristic over
//! the lower-cased input: no tokenization, no grammar, no model. The
//! extractor never fails; signals it cannot parse are simply absent
//! from the result.

mod extractor;
mod keywords;

pub use bikefinder_core::PreferenceRecord;
pub use extractor::extract;
pub use keywords::{CATEGORY_KEYWORDS, TERRAIN_KEYWORDS};
