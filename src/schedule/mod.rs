//! # Scheduled Callbacks
//!
//! A framework-free replacement for render-lifecycle hooks: a registry
//! of one-shot callbacks with due times and cancel tokens, plus a
//! quiet-period debouncer built on tokio tasks.

pub mod debounce;
pub mod errors;
pub mod registry;

pub use debounce::Debouncer;
pub use errors::{ScheduleError, ScheduleResult};
pub use registry::CallbackRegistry;
