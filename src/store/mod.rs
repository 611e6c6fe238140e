//! # Key/Value Store
//!
//! In-memory key/value store with change watchers. Replaces a browser
//! local-storage binding with a framework-free equivalent: `set`/`get`/
//! `remove` plus `watch`, which delivers (key, old value, new value) to
//! a callback on every change of the watched key.
//!
//! Durability is out of scope; the store lives and dies with the
//! process.

pub mod errors;
pub mod kv;

pub use errors::{StoreError, StoreResult};
pub use kv::KvStore;
