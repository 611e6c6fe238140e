//! recordkit - utilities for heterogeneous JSON records
//!
//! A flat set of independent, individually importable functions:
//! tokenize free text, left-join record sequences, filter them by
//! query, group and aggregate them, and sort them, plus small service
//! helpers (watchable key/value store, scheduled callbacks with
//! debounce, file metadata reading, fixed-offset timezone conversion).
//!
//! Everything in the transformation core is synchronous and pure:
//! inputs are caller-owned, outputs are new values, and no function
//! keeps state between calls.

pub mod aggregate;
pub mod clean;
pub mod fileinfo;
pub mod join;
pub mod observe;
pub mod record;
pub mod schedule;
pub mod search;
pub mod sort;
pub mod store;
pub mod text;
pub mod timezone;

pub use aggregate::{aggregate_data, group_by, GroupTable, SumTable};
pub use clean::{remove_element, remove_empty_elements, remove_property};
pub use fileinfo::{read_file_info, FileInfo};
pub use join::join_mapping;
pub use record::{has_property, has_value, Record};
pub use schedule::{CallbackRegistry, Debouncer};
pub use search::search_filtering;
pub use sort::{sort_array, sort_objects_by_property, SortError};
pub use store::KvStore;
pub use text::{get_words, is_valid_email};
pub use timezone::{convert_time_zone, ZoneConversion};
