//! Display strings for the two supported languages.
//!
//! Labels are only ever used for rendering. Stored data and computations
//! never depend on the selected language.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Criterion;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    Es,
    #[default]
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::Es => &ES,
            Language::En => &EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language '{}' (expected: es, en)", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Label table for one language.
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub welcome: &'static str,
    criteria: [&'static str; 10],
    pub comments: &'static str,
    pub submit_success: &'static str,
    pub no_data: &'static str,
    pub recent_ratings: &'static str,
    pub data_visualization: &'static str,
    pub country: &'static str,
    pub club: &'static str,
    pub position: &'static str,
    pub stars: &'static str,
    pub name: &'static str,
    pub distributions: &'static str,
    pub reliable: &'static str,
    pub not_reliable: &'static str,
    pub average_ratings: &'static str,
    pub number_by_country: &'static str,
    pub number_by_club: &'static str,
    pub average_reliability: &'static str,
    empty_name: &'static str,
    empty_comment: &'static str,
    incomplete_form: &'static str,
}

impl Labels {
    pub fn criterion(&self, criterion: Criterion) -> &'static str {
        self.criteria[criterion.index()]
    }

    pub fn validation_error(&self, error: &ValidationError) -> &'static str {
        match error {
            ValidationError::EmptyName => self.empty_name,
            ValidationError::EmptyComment => self.empty_comment,
            ValidationError::IncompleteForm => self.incomplete_form,
        }
    }
}

static ES: Labels = Labels {
    title: "Reputación - Gestión de Relaciones con Clubes de Fútbol",
    welcome: "Bienvenido a Reputación, una herramienta diseñada para agentes FIFA para evaluar y gestionar la reputación de los departamentos técnicos de los clubes de fútbol.",
    criteria: [
        "Claridad en la Comunicación",
        "Rapidez en las Respuestas",
        "Actitud Profesional",
        "Cortesía y Amabilidad",
        "Eficiencia en Procesos",
        "Solución de Problemas",
        "Fiabilidad de la Información",
        "Cumplimiento de Compromisos",
        "Accesibilidad",
        "Flexibilidad",
    ],
    comments: "Comentarios Generales",
    submit_success: "¡Valoración enviada exitosamente!",
    no_data: "No hay datos disponibles para visualizar.",
    recent_ratings: "Valoraciones Recientes",
    data_visualization: "Visualización de Datos",
    country: "País",
    club: "Club",
    position: "Cargo",
    stars: "Estrellas",
    name: "Nombre",
    distributions: "Distribución de Confiabilidad",
    reliable: "Confiable",
    not_reliable: "No Confiable",
    average_ratings: "Promedio de Valoraciones por Criterio",
    number_by_country: "Número de Valoraciones por País",
    number_by_club: "Número de Valoraciones por Club",
    average_reliability: "Promedio de Confiabilidad por País",
    empty_name: "Por favor, ingresa tu nombre.",
    empty_comment: "Por favor, ingresa un comentario.",
    incomplete_form: "Por favor, completa todos los campos del registro antes de enviar una valoración.",
};

static EN: Labels = Labels {
    title: "Reputation - Management of Football Club Relations",
    welcome: "Welcome to Reputation, a tool designed for FIFA agents to evaluate and manage the reputation of technical departments of football clubs.",
    criteria: [
        "Clarity in Communication",
        "Speed of Response",
        "Professional Attitude",
        "Courtesy and Kindness",
        "Efficiency in Processes",
        "Problem Solving",
        "Reliability of Information",
        "Commitment Fulfillment",
        "Accessibility",
        "Flexibility",
    ],
    comments: "General Comments",
    submit_success: "Rating submitted successfully!",
    no_data: "No data available for visualization.",
    recent_ratings: "Recent Ratings",
    data_visualization: "Data Visualization",
    country: "Country",
    club: "Club",
    position: "Position",
    stars: "Stars",
    name: "Name",
    distributions: "Distribution of Reliability",
    reliable: "Reliable",
    not_reliable: "Not Reliable",
    average_ratings: "Average Ratings by Criterion",
    number_by_country: "Number of Ratings by Country",
    number_by_club: "Number of Ratings by Club",
    average_reliability: "Average Reliability by Country",
    empty_name: "Please enter your name.",
    empty_comment: "Please enter a comment.",
    incomplete_form: "Please fill in all registration fields before submitting a rating.",
};
