//! # sheetsync-transforms
//!
//! Pure transforms used to reshape collections between a JSON payload and a
//! tabular store: summing, pairing, deduplicating, chunking, grouping, and
//! key filtering. All grouping and record operations preserve insertion
//! order.

pub mod array;
pub mod matrix;
pub mod record;

pub use array::{chunk, deduplicate, partition, sum, zip};
pub use matrix::column_wise_sum;
pub use record::{group_by, group_by_with, keep_keys, lowercase_keys};
