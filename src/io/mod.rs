//! Input for the benchmark: delimited rating records turned into integers
//!
//! The reader is line-oriented and yields at most `limit` values. Mapping
//! raw fields to the sort domain (scaling fractional ratings) happens here,
//! so the containers and sorts only ever see ready integers.

pub mod ratings;

pub use ratings::{RatingField, RatingsReader, ReadSummary};
