use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, ensure, Context, Result};

use crate::matching::options::MatchConfig;

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding `sample_resume.txt` and `sample_job.txt`.
    pub sample_data_dir: PathBuf,
    /// Baseline matching configuration; requests may layer overrides on top.
    pub matching: MatchConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = MatchConfig::default();

        let mut matching = MatchConfig {
            max_phrase_length: parse_or(&lookup, "MATCH_MAX_PHRASE_LENGTH", defaults.max_phrase_length)?,
            min_keyword_frequency: parse_or(
                &lookup,
                "MATCH_MIN_KEYWORD_FREQUENCY",
                defaults.min_keyword_frequency,
            )?,
            max_suggestions: parse_or(&lookup, "MATCH_MAX_SUGGESTIONS", defaults.max_suggestions)?,
            max_keywords: parse_or(&lookup, "MATCH_MAX_KEYWORDS", defaults.max_keywords)?,
            min_word_length: parse_or(&lookup, "MATCH_MIN_WORD_LENGTH", defaults.min_word_length)?,
            stemming: parse_or(&lookup, "MATCH_STEMMING", defaults.stemming)?,
            extra_known_terms: list(&lookup, "MATCH_EXTRA_KNOWN_TERMS"),
            ..defaults
        };
        matching
            .stopwords
            .extend(list(&lookup, "MATCH_EXTRA_STOPWORDS"));

        ensure!(
            matching.max_phrase_length >= 1,
            "MATCH_MAX_PHRASE_LENGTH must be at least 1"
        );
        ensure!(
            matching.min_keyword_frequency >= 1,
            "MATCH_MIN_KEYWORD_FREQUENCY must be at least 1"
        );
        ensure!(
            matching.max_keywords >= 1,
            "MATCH_MAX_KEYWORDS must be at least 1"
        );

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080u16).context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            sample_data_dir: lookup("SAMPLE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            matching,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("Environment variable '{key}' has invalid value '{raw}': {e}")),
        None => Ok(default),
    }
}

/// Comma-separated list; blank entries are skipped.
fn list(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Vec<String> {
    lookup(key)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
