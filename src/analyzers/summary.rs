use chrono::Utc;

use crate::analyzers::aggregate::{
    average_per_criterion, average_reliability_by_country, count_by_club, count_by_country,
    reliability_distribution,
};
use crate::analyzers::types::Summary;
use crate::record::Dataset;

/// Bundles every summary view of `dataset`. Returns `None` for an empty
/// dataset so callers render "no data" instead of empty charts.
pub fn summarize(dataset: &Dataset) -> Option<Summary> {
    if dataset.is_empty() {
        return None;
    }

    Some(Summary {
        schema_version: 1,
        generated_at: Utc::now(),
        total_ratings: dataset.len(),
        reliability: reliability_distribution(dataset),
        criteria: average_per_criterion(dataset),
        by_country: count_by_country(dataset),
        top_clubs: count_by_club(dataset),
        reliability_by_country: average_reliability_by_country(dataset),
    })
}
