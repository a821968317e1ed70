use crate::analyzers::reliability::classify_reliability;
use crate::analyzers::types::{CriterionAverage, GroupCount, GroupRate, ReliabilityDistribution};
use crate::analyzers::utility::{mean, ratio};
use crate::catalog::Criterion;
use crate::record::Dataset;
use std::collections::{BTreeMap, HashMap};

/// Number of clubs kept by [`count_by_club`].
pub const TOP_CLUBS: usize = 10;

/// Counts reliable and not-reliable ratings. Both counts are zero for an
/// empty dataset; callers should show a "no data" state in that case.
pub fn reliability_distribution(dataset: &Dataset) -> ReliabilityDistribution {
    let reliable = dataset.iter().filter(|r| classify_reliability(r)).count();
    ReliabilityDistribution {
        reliable,
        not_reliable: dataset.len() - reliable,
    }
}

/// Mean score of each criterion across the dataset, in [`Criterion::ALL`]
/// order. Empty when the dataset is empty.
pub fn average_per_criterion(dataset: &Dataset) -> Vec<CriterionAverage> {
    if dataset.is_empty() {
        return Vec::new();
    }

    Criterion::ALL
        .into_iter()
        .map(|criterion| {
            let series: Vec<f64> = dataset
                .iter()
                .map(|r| f64::from(r.scores().get(criterion)))
                .collect();
            CriterionAverage {
                criterion,
                average: mean(&series),
            }
        })
        .collect()
}

/// Ratings per country, most frequent first.
pub fn count_by_country(dataset: &Dataset) -> Vec<GroupCount> {
    count_by(dataset.iter().map(|r| r.country()))
}

/// Ratings per club, most frequent first, limited to the top [`TOP_CLUBS`].
pub fn count_by_club(dataset: &Dataset) -> Vec<GroupCount> {
    let mut counts = count_by(dataset.iter().map(|r| r.club()));
    counts.truncate(TOP_CLUBS);
    counts
}

/// Fraction of each country's ratings that are reliable, ordered by country.
pub fn average_reliability_by_country(dataset: &Dataset) -> Vec<GroupRate> {
    let mut tally: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

    for record in dataset {
        let entry = tally.entry(record.country()).or_default();
        if classify_reliability(record) {
            entry.0 += 1;
        }
        entry.1 += 1;
    }

    tally
        .into_iter()
        .map(|(country, (reliable, total))| GroupRate {
            key: country.to_string(),
            rate: ratio(reliable, total),
        })
        .collect()
}

/// Counts occurrences of each key, sorted by descending count. The sort is
/// stable, so equal counts keep first-seen order.
fn count_by<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<GroupCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<GroupCount> = Vec::new();

    for key in keys {
        match positions.get(key) {
            Some(&i) => counts[i].count += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push(GroupCount {
                    key: key.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Scores;
    use crate::validate::{RatingForm, submit_rating};

    fn push(dataset: &mut Dataset, country: &str, club: &str, scores: [i64; 10]) {
        let record = submit_rating(&RatingForm {
            name: "Ana".into(),
            position: "Entrenador".into(),
            country: country.into(),
            club: club.into(),
            scores: Scores::new(scores).unwrap(),
            comment: "ok".into(),
        })
        .unwrap();
        dataset.push(record);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new();
        let dist = reliability_distribution(&dataset);
        assert_eq!(dist, ReliabilityDistribution::default());
        assert!(dist.is_empty());
        assert!(average_per_criterion(&dataset).is_empty());
        assert!(count_by_country(&dataset).is_empty());
        assert!(count_by_club(&dataset).is_empty());
        assert!(average_reliability_by_country(&dataset).is_empty());
    }

    #[test]
    fn test_reliability_distribution() {
        let mut dataset = Dataset::new();
        push(&mut dataset, "España", "A", [5; 10]);
        push(&mut dataset, "España", "A", [3; 10]);
        push(&mut dataset, "México", "B", [2; 10]);

        let dist = reliability_distribution(&dataset);
        assert_eq!(dist.reliable, 2);
        assert_eq!(dist.not_reliable, 1);
        assert_eq!(dist.total(), 3);
    }

    #[test]
    fn test_average_per_criterion() {
        let mut dataset = Dataset::new();
        push(&mut dataset, "España", "A", [5, 1, 3, 3, 3, 3, 3, 3, 3, 3]);
        push(&mut dataset, "España", "A", [4, 2, 3, 3, 3, 3, 3, 3, 3, 1]);

        let averages = average_per_criterion(&dataset);
        assert_eq!(averages.len(), 10);
        assert_eq!(averages[0].criterion, Criterion::Clarity);
        assert_eq!(averages[0].average, 4.5);
        assert_eq!(averages[1].average, 1.5);
        assert_eq!(averages[9].criterion, Criterion::Flexibility);
        assert_eq!(averages[9].average, 2.0);
    }

    #[test]
    fn test_count_by_country_descending_with_stable_ties() {
        let mut dataset = Dataset::new();
        push(&mut dataset, "México", "A", [3; 10]);
        push(&mut dataset, "Argentina", "A", [3; 10]);
        push(&mut dataset, "España", "A", [3; 10]);
        push(&mut dataset, "España", "A", [3; 10]);

        let counts = count_by_country(&dataset);
        let keys: Vec<_> = counts.iter().map(|c| (c.key.as_str(), c.count)).collect();
        assert_eq!(keys, vec![("España", 2), ("México", 1), ("Argentina", 1)]);
    }

    #[test]
    fn test_count_by_club_keeps_top_ten() {
        let mut dataset = Dataset::new();
        for i in 0..12 {
            let club = format!("Club {i}");
            // Clubs 0 and 1 get one rating, the rest get two.
            let n = if i < 2 { 1 } else { 2 };
            for _ in 0..n {
                push(&mut dataset, "España", &club, [3; 10]);
            }
        }

        let counts = count_by_club(&dataset);
        assert_eq!(counts.len(), 10);
        assert!(counts.iter().all(|c| c.count == 2));
        assert_eq!(counts[0].key, "Club 2");
        assert!(!counts.iter().any(|c| c.key == "Club 0" || c.key == "Club 1"));
    }

    #[test]
    fn test_average_reliability_by_country() {
        let mut dataset = Dataset::new();
        push(&mut dataset, "México", "A", [5; 10]);
        push(&mut dataset, "España", "A", [5; 10]);
        push(&mut dataset, "España", "B", [1; 10]);
        push(&mut dataset, "España", "C", [3; 10]);
        push(&mut dataset, "España", "C", [2; 10]);

        let rates = average_reliability_by_country(&dataset);
        assert_eq!(
            rates,
            vec![
                GroupRate {
                    key: "España".into(),
                    rate: 0.5
                },
                GroupRate {
                    key: "México".into(),
                    rate: 1.0
                },
            ]
        );
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let mut dataset = Dataset::new();
        push(&mut dataset, "Argentina", "Boca", [4; 10]);
        push(&mut dataset, "México", "Pumas", [2; 10]);

        assert_eq!(count_by_club(&dataset), count_by_club(&dataset));
        assert_eq!(
            average_per_criterion(&dataset),
            average_per_criterion(&dataset)
        );
        assert_eq!(dataset.len(), 2);
    }
}
