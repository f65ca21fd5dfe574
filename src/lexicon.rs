// Lexicon: keyword tables, sentiment word lists and tuning thresholds.
//
// Built once at startup and passed by reference into the scorers and the
// pipeline. Nothing mutates it afterwards. A JSON override file can replace
// any part of it; omitted fields keep the built-in defaults.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::articles::models::Category;

/// Keyword priority tier within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Score weight per priority tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            high: 3.0,
            medium: 2.0,
            low: 1.0,
        }
    }
}

impl PriorityWeights {
    pub fn weight(&self, priority: Priority) -> f64 {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

/// Keyword phrases for one category, grouped by priority.
///
/// The same phrase may appear under more than one tier; each occurrence
/// counts separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryKeywords {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl CategoryKeywords {
    fn from_lists(high: &[&str], medium: &[&str], low: &[&str]) -> Self {
        let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        Self {
            high: owned(high),
            medium: owned(medium),
            low: owned(low),
        }
    }

    /// Every `(priority, phrase)` pair, high tier first, phrases in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Priority, &str)> + '_ {
        tier(Priority::High, &self.high)
            .chain(tier(Priority::Medium, &self.medium))
            .chain(tier(Priority::Low, &self.low))
    }

    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn tier(priority: Priority, list: &[String]) -> impl Iterator<Item = (Priority, &str)> + '_ {
    list.iter().map(move |k| (priority, k.as_str()))
}

/// Similarity cut-offs used by duplicate detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Combined title/body similarity at or above which two articles are duplicates.
    pub similarity: f64,
    /// Stricter title-only cut-off. Carried in the configuration surface but
    /// not consulted by duplicate resolution.
    pub title_duplicate: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            similarity: 0.7,
            title_duplicate: 0.8,
        }
    }
}

/// The full scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub weights: PriorityWeights,
    /// Multiplier on a tier weight when a phrase appears in the title.
    pub title_bonus: f64,
    pub categories: BTreeMap<Category, CategoryKeywords>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub thresholds: Thresholds,
}

impl Default for Lexicon {
    fn default() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            Category::Finance,
            CategoryKeywords::from_lists(
                &["federal reserve", "interest rates", "stock market", "cryptocurrency", "banking"],
                &["investment", "economy", "inflation", "GDP", "earnings"],
                &["trading", "currency", "bonds", "commodities", "financial"],
            ),
        );
        categories.insert(
            Category::Technology,
            CategoryKeywords::from_lists(
                &["artificial intelligence", "quantum computing", "breakthrough", "innovation"],
                &["startup", "tech stocks", "cybersecurity", "data breach", "automation"],
                &["software", "hardware", "internet", "digital", "computing"],
            ),
        );
        categories.insert(
            Category::WorldNews,
            CategoryKeywords::from_lists(
                &["climate summit", "global agreement", "international", "trade war"],
                &["european union", "trade agreement", "diplomatic", "treaty"],
                &["foreign", "international", "global", "worldwide", "overseas"],
            ),
        );
        categories.insert(
            Category::TopStories,
            CategoryKeywords::from_lists(
                &["breaking", "historic", "milestone", "unprecedented"],
                &["major", "significant", "important", "critical"],
                &["news", "report", "update", "announcement", "development"],
            ),
        );
        categories.insert(
            Category::Health,
            CategoryKeywords::from_lists(
                &["breakthrough", "clinical trials", "medical breakthrough", "cure"],
                &["treatment", "healthcare", "research", "study"],
                &["medical", "health", "wellness", "patient", "hospital"],
            ),
        );
        categories.insert(
            Category::Politics,
            CategoryKeywords::from_lists(
                &["presidential election", "campaign", "voting", "legislation"],
                &["political", "government", "policy", "congress"],
                &["politician", "party", "debate", "poll", "candidate"],
            ),
        );

        let words = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };

        Self {
            weights: PriorityWeights::default(),
            title_bonus: 1.5,
            categories,
            positive: words(&[
                "breakthrough", "success", "growth", "improvement", "achievement", "milestone",
                "recovery", "promising", "optimistic", "surge", "rally", "gains", "progress",
            ]),
            negative: words(&[
                "crisis", "decline", "collapse", "threat", "risk", "concern", "breach",
                "disruption", "volatility", "uncertainty", "headwinds", "challenges", "problems",
            ]),
            thresholds: Thresholds::default(),
        }
    }
}

impl Lexicon {
    /// Parse a lexicon override from JSON. Missing fields use the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_json::from_str(json).context("Failed to parse lexicon JSON")?;
        Ok(lexicon)
    }

    /// Load a lexicon override file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon from {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid lexicon file {}", path.display()))
    }

    /// Keyword table for a category, if the lexicon has one.
    pub fn keywords_for(&self, category: Category) -> Option<&CategoryKeywords> {
        self.categories.get(&category)
    }
}
