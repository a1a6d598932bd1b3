// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `quizbank.toml`: data location, penalty, time limit, search limit.
//!
//! Every field is optional. A missing default file means defaults; a missing
//! file passed explicitly with `--config` is an error.
//!
//! ```toml
//! data_dir = "data"
//!
//! [scoring]
//! penalty = 0.25
//!
//! [quiz]
//! time_limit_minutes = 90
//!
//! [search]
//! limit = 20
//!
//! [share]
//! site_title = "CMB Quiz Hub"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};
use crate::scoring::DEFAULT_PENALTY;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "quizbank.toml";

/// Longest accepted countdown: one day.
pub const MAX_TIME_LIMIT_MINUTES: u64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_penalty")]
    pub penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "default_time_limit_minutes")]
    pub time_limit_minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_site_title")]
    pub site_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            scoring: ScoringConfig::default(),
            quiz: QuizConfig::default(),
            search: SearchConfig::default(),
            share: ShareConfig::default(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { penalty: default_penalty() }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            time_limit_minutes: default_time_limit_minutes(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { limit: default_search_limit() }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_penalty() -> f64 {
    DEFAULT_PENALTY
}

fn default_time_limit_minutes() -> u64 {
    60
}

fn default_search_limit() -> usize {
    50
}

fn default_site_title() -> String {
    "CMB Quiz Hub".to_string()
}

impl Config {
    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p).map_err(|e| {
                    QuizError::Config(format!("failed to read {}: {}", p.display(), e))
                })?;
                Self::from_toml(&content)?
            }
            None => match std::fs::read_to_string(DEFAULT_CONFIG_FILE) {
                Ok(content) => Self::from_toml(&content)?,
                Err(_) => {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            },
        };
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| QuizError::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_penalty(self.scoring.penalty)?;
        let minutes = self.quiz.time_limit_minutes;
        if !(1..=MAX_TIME_LIMIT_MINUTES).contains(&minutes) {
            return Err(QuizError::Config(format!(
                "quiz.time_limit_minutes must be between 1 and {}, got {}",
                MAX_TIME_LIMIT_MINUTES, minutes
            )));
        }
        Ok(())
    }

    /// The countdown length. Saturates for values `validate` would reject.
    pub fn time_limit(&self) -> Duration {
        let minutes = self.quiz.time_limit_minutes.min(MAX_TIME_LIMIT_MINUTES);
        Duration::from_secs(minutes * 60)
    }
}

/// A penalty must be a finite fraction in `[0, 1]`.
pub fn validate_penalty(penalty: f64) -> Result<()> {
    if penalty.is_finite() && (0.0..=1.0).contains(&penalty) {
        Ok(())
    } else {
        Err(QuizError::Config(format!(
            "penalty must be between 0 and 1, got {}",
            penalty
        )))
    }
}
