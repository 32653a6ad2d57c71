//! Fuzzing library for citation-harvest.
//!
//! This crate provides fuzzing targets for the JSON deserialization of
//! OpenAlex and Semantic Scholar pages, and for output slugs.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_citation_page -- -max_total_time=60
//! ```

pub use citation_harvest::{models, output};
