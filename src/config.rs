use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::digest::DigestSettings;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// take precedence over anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON article list to process. Unset means the bundled sample set.
    pub input_path: Option<PathBuf>,
    /// JSON lexicon override. Unset means the built-in lexicon.
    pub lexicon_path: Option<PathBuf>,
    pub articles_per_section: usize,
    pub summary_max_chars: usize,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = DigestSettings::default();
        Ok(Self {
            input_path: get("NEWSDIGEST_INPUT").filter(|v| !v.is_empty()).map(PathBuf::from),
            lexicon_path: get("NEWSDIGEST_LEXICON").filter(|v| !v.is_empty()).map(PathBuf::from),
            articles_per_section: parse_count(
                &get,
                "NEWSDIGEST_ARTICLES_PER_SECTION",
                defaults.articles_per_section,
                0,
            )?,
            summary_max_chars: parse_count(
                &get,
                "NEWSDIGEST_SUMMARY_MAX_CHARS",
                defaults.summary_max_chars,
                MIN_SUMMARY_CHARS,
            )?,
        })
    }

    pub fn digest_settings(&self) -> DigestSettings {
        DigestSettings {
            articles_per_section: self.articles_per_section,
            summary_max_chars: self.summary_max_chars,
        }
    }
}

/// Shortest summary that still fits the "..." truncation marker.
const MIN_SUMMARY_CHARS: usize = 3;

fn parse_count(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
    min: usize,
) -> Result<usize> {
    let value = match get(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("{key} must be a non-negative integer, got {raw:?}"))?,
        _ => default,
    };
    if value < min {
        bail!("{key} must be at least {min}, got {value}");
    }
    Ok(value)
}
