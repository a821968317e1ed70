use crate::record::RatingRecord;

/// Mean criterion score at or above which a rating counts as reliable.
pub const RELIABILITY_THRESHOLD: f64 = 3.0;

/// Returns `true` if the mean of the record's ten criterion scores is at
/// least [`RELIABILITY_THRESHOLD`].
pub fn classify_reliability(record: &RatingRecord) -> bool {
    record.scores().mean() >= RELIABILITY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Scores;
    use crate::validate::{RatingForm, submit_rating};

    fn with_scores(scores: [i64; 10]) -> RatingRecord {
        submit_rating(&RatingForm {
            name: "Ana".into(),
            position: "CEO".into(),
            country: "México".into(),
            club: "Pumas".into(),
            scores: Scores::new(scores).unwrap(),
            comment: "x".into(),
        })
        .unwrap()
    }

    #[test]
    fn test_reliability_boundaries() {
        assert!(classify_reliability(&with_scores([3; 10])));
        assert!(classify_reliability(&with_scores([1, 5, 1, 5, 1, 5, 1, 5, 1, 5])));
        assert!(classify_reliability(&with_scores([3, 3, 3, 3, 3, 3, 3, 3, 3, 4])));
        assert!(!classify_reliability(&with_scores([3, 3, 3, 3, 3, 3, 3, 3, 3, 2])));
        assert!(!classify_reliability(&with_scores([1; 10])));
    }
}
