//! # Grouping and Aggregation
//!
//! Partitions record sequences by a key field and sums numeric fields
//! per partition. Both tables preserve first-seen order of groups.

pub mod group;
pub mod sum;

pub use group::{group_by, GroupTable};
pub use sum::{aggregate_data, SumTable};
