//! Rating records and the ordered dataset that owns them.

use crate::catalog::Criterion;
use crate::error::ScoreError;

/// The ten criterion scores of one rating, each in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores([u8; 10]);

impl Scores {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Builds a score set from values in [`Criterion::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::OutOfRange`] for the first value outside 1..=5.
    pub fn new(values: [i64; 10]) -> Result<Self, ScoreError> {
        let mut scores = [0u8; 10];
        for (criterion, value) in Criterion::ALL.into_iter().zip(values) {
            if !(i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
                return Err(ScoreError::OutOfRange { criterion, value });
            }
            scores[criterion.index()] = value as u8;
        }
        Ok(Self(scores))
    }

    pub fn get(&self, criterion: Criterion) -> u8 {
        self.0[criterion.index()]
    }

    pub fn values(&self) -> &[u8; 10] {
        &self.0
    }

    /// Arithmetic mean of the ten scores, unrounded.
    pub fn mean(&self) -> f64 {
        let total: u32 = self.0.iter().map(|&s| u32::from(s)).sum();
        f64::from(total) / self.0.len() as f64
    }
}

/// One submitted evaluation. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingRecord {
    pub(crate) country: String,
    pub(crate) club: String,
    pub(crate) position: String,
    pub(crate) name: String,
    pub(crate) agent: String,
    pub(crate) scores: Scores,
    pub(crate) comment: String,
    pub(crate) composite_score: f64,
}

impl RatingRecord {
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn club(&self) -> &str {
        &self.club
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Submitting agent. Currently always the same value as [`RatingRecord::name`].
    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Mean of the criterion scores, fixed when the record was composed.
    pub fn composite_score(&self) -> f64 {
        self.composite_score
    }
}

/// All rating records in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<RatingRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_records(records: Vec<RatingRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RatingRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn push(&mut self, record: RatingRecord) {
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<RatingRecord> {
        self.records.pop()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a RatingRecord;
    type IntoIter = std::slice::Iter<'a, RatingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
