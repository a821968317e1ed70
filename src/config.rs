//! Runtime settings resolved from the environment.
//!
//! Recognised variables (a `.env` file is loaded first by the binary):
//!
//! | Variable           | Default                   |
//! |--------------------|---------------------------|
//! | `CLUB_RATER_DATA`  | `data/result-rating.csv`  |
//! | `CLUB_RATER_LANG`  | `en`                      |
//! | `LOG_FILE_PATH`    | `logs/club_rater.log`     |

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::locale::Language;

pub const DEFAULT_DATA_PATH: &str = "data/result-rating.csv";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/club_rater.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_path: PathBuf,
    pub log_file_path: PathBuf,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE_PATH),
            language: Language::default(),
        }
    }
}

impl Settings {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup. Unset or blank
    /// variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let language = match get("CLUB_RATER_LANG") {
            Some(code) => code.parse::<Language>().context("invalid CLUB_RATER_LANG")?,
            None => defaults.language,
        };

        Ok(Self {
            data_path: get("CLUB_RATER_DATA")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            log_file_path: get("LOG_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file_path),
            language,
        })
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, language: Option<Language>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(language) = language {
            self.language = language;
        }
        self
    }
}
