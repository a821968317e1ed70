//! Closed vocabularies used by the rating form: countries, staff positions,
//! and the ten evaluation criteria.

use serde::Serialize;

/// Countries selectable on the form. Stored verbatim in the dataset.
pub const COUNTRIES: &[&str] = &["España", "Argentina", "México"];

/// Technical staff role titles. Stored verbatim in the dataset.
pub const POSITIONS: &[&str] = &[
    "Director Deportivo",
    "Entrenador",
    "Asistente",
    "Jefe de Scouting",
    "Scouting",
    "CEO",
    "Analista de Datos",
];

/// One of the ten fixed evaluation dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Clarity,
    Speed,
    Professionalism,
    Courtesy,
    Efficiency,
    ProblemSolving,
    Reliability,
    Commitment,
    Accessibility,
    Flexibility,
}

impl Criterion {
    /// All criteria in form and column order.
    pub const ALL: [Criterion; 10] = [
        Criterion::Clarity,
        Criterion::Speed,
        Criterion::Professionalism,
        Criterion::Courtesy,
        Criterion::Efficiency,
        Criterion::ProblemSolving,
        Criterion::Reliability,
        Criterion::Commitment,
        Criterion::Accessibility,
        Criterion::Flexibility,
    ];

    /// Position of this criterion within [`Criterion::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name used in the persisted file header.
    pub fn column(self) -> &'static str {
        match self {
            Criterion::Clarity => "Clarity",
            Criterion::Speed => "Speed",
            Criterion::Professionalism => "Professionalism",
            Criterion::Courtesy => "Courtesy",
            Criterion::Efficiency => "Efficiency",
            Criterion::ProblemSolving => "ProblemSolving",
            Criterion::Reliability => "Reliability",
            Criterion::Commitment => "Commitment",
            Criterion::Accessibility => "Accessibility",
            Criterion::Flexibility => "Flexibility",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criterion_index_matches_order() {
        for (i, c) in Criterion::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }
}
