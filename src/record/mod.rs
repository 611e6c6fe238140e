//! # Record Primitives
//!
//! The record type shared by every utility in this crate, plus the
//! presence predicate and value coercions built on top of it.

pub mod access;
pub mod presence;

use serde_json::{Map, Value};

/// A record: named fields with heterogeneous JSON values.
pub type Record = Map<String, Value>;

pub use access::{stringify_key, value_as_number, value_as_text};
pub use presence::{has_property, has_value};
