//! Serializable summary rows produced by the aggregation functions.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Criterion;

/// Number of reliable and not-reliable ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReliabilityDistribution {
    pub reliable: usize,
    pub not_reliable: usize,
}

impl ReliabilityDistribution {
    pub fn total(&self) -> usize {
        self.reliable + self.not_reliable
    }

    /// True when there is nothing to chart.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Mean score of one criterion across all ratings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionAverage {
    pub criterion: Criterion,
    pub average: f64,
}

/// Number of ratings sharing a grouping key (country or club).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub key: String,
    pub count: usize,
}

/// Fraction of a country's ratings classified reliable, in 0.0..=1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRate {
    pub key: String,
    pub rate: f64,
}

/// Every summary view over one dataset snapshot, for export.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub total_ratings: usize,
    pub reliability: ReliabilityDistribution,
    pub criteria: Vec<CriterionAverage>,
    pub by_country: Vec<GroupCount>,
    pub top_clubs: Vec<GroupCount>,
    pub reliability_by_country: Vec<GroupRate>,
}
