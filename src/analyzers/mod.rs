//! Read-only summaries derived from a [`Dataset`](crate::record::Dataset).
//!
//! Every function here is a pure function of the dataset it is given.
//! Nothing is cached between calls.

pub mod aggregate;
pub mod reliability;
pub mod summary;
pub mod types;
pub mod utility;

pub use aggregate::{
    average_per_criterion, average_reliability_by_country, count_by_club, count_by_country,
    reliability_distribution,
};
pub use reliability::classify_reliability;
pub use summary::summarize;
