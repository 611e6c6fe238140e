//! # Observability
//!
//! Structured diagnostics for the skip policies: the search filter and
//! the aggregator absorb malformed elements instead of raising, and log
//! one line per skipped element here.

pub mod logger;

pub use logger::{Logger, Severity};
