//! Form validation and composition of [`RatingRecord`]s.

use tracing::debug;

use crate::error::ValidationError;
use crate::record::{RatingRecord, Scores};

/// Raw values collected by the form. Scores are already range-checked.
#[derive(Debug, Clone)]
pub struct RatingForm {
    pub name: String,
    pub position: String,
    pub country: String,
    pub club: String,
    pub scores: Scores,
    pub comment: String,
}

/// Validates a submitted form and composes the record it describes.
///
/// Checks run in a fixed order and the first failure is returned:
/// empty name, then empty comment, then any missing registration field.
/// The composite score is the unrounded mean of the ten criterion scores.
/// Nothing is persisted here.
#[tracing::instrument(skip(form), fields(club = %form.club, country = %form.country))]
pub fn submit_rating(form: &RatingForm) -> Result<RatingRecord, ValidationError> {
    if is_blank(&form.name) {
        return Err(ValidationError::EmptyName);
    }
    if is_blank(&form.comment) {
        return Err(ValidationError::EmptyComment);
    }
    if [&form.name, &form.position, &form.club, &form.country]
        .into_iter()
        .any(|field| is_blank(field))
    {
        return Err(ValidationError::IncompleteForm);
    }

    let composite_score = form.scores.mean();
    debug!(composite_score, "Rating composed");

    Ok(RatingRecord {
        country: form.country.clone(),
        club: form.club.clone(),
        position: form.position.clone(),
        name: form.name.clone(),
        agent: form.name.clone(),
        scores: form.scores,
        comment: form.comment.clone(),
        composite_score,
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
