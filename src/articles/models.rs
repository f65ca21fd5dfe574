// Article models: the unit the engine scores, filters and deduplicates.
//
// The immutable fields (title, body, category, source, keywords) come from
// whoever assembled the input list. The engine only ever writes the three
// annotation fields at the bottom of `Article`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editorial category assigned to an article when it is created.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TopStories,
    Finance,
    Technology,
    WorldNews,
    Politics,
    Health,
}

impl Category {
    /// Every category, in digest section order.
    pub const ALL: [Category; 6] = [
        Category::TopStories,
        Category::Finance,
        Category::Technology,
        Category::WorldNews,
        Category::Politics,
        Category::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TopStories => "Top Stories",
            Category::Finance => "Finance",
            Category::Technology => "Technology",
            Category::WorldNews => "World News",
            Category::Politics => "Politics",
            Category::Health => "Health",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse three-way polarity of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Article text. Scored together with the title.
    pub body: String,
    pub category: Category,
    /// Provenance label, e.g. "Reuters".
    pub source: String,
    /// Author-supplied tags, in the order they were given.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub publication_date: DateTime<Utc>,
    #[serde(default)]
    pub url: String,

    /// Weighted keyword density for the article's category. Set by the pipeline.
    #[serde(default)]
    pub relevance_score: f64,
    /// Set by the pipeline.
    #[serde(default)]
    pub sentiment: Sentiment,
    /// True once the pipeline has scored this article.
    #[serde(default)]
    pub processed: bool,
}

impl Article {
    /// Create an unscored article published now.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        category: Category,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            category,
            source: source.into(),
            keywords: Vec::new(),
            publication_date: Utc::now(),
            url: String::new(),
            relevance_score: 0.0,
            sentiment: Sentiment::Neutral,
            processed: false,
        }
    }

    /// Attach author-supplied keyword tags.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

impl std::fmt::Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.title,
            self.source,
            self.publication_date.format("%Y-%m-%d")
        )
    }
}
