// Digest compilation: group ranked articles into per-category sections.
//
// Sections are capped at a fixed number of articles, taken in ranked order,
// and each gets a short generated summary. Sections appear in a fixed
// editorial order and empty ones are left out.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::articles::models::{Article, Category, Sentiment};
use crate::output::truncate_chars;

/// Knobs for digest compilation.
#[derive(Debug, Clone)]
pub struct DigestSettings {
    pub articles_per_section: usize,
    pub summary_max_chars: usize,
}

impl Default for DigestSettings {
    fn default() -> Self {
        Self {
            articles_per_section: 5,
            summary_max_chars: 150,
        }
    }
}

/// One category's slice of the digest.
#[derive(Debug, Clone, Serialize)]
pub struct Section<'a> {
    pub category: Category,
    pub summary: String,
    pub articles: Vec<&'a Article>,
}

/// A compiled digest, ready for display or export.
#[derive(Debug, Clone, Serialize)]
pub struct Digest<'a> {
    pub title: String,
    /// Human-readable date, e.g. "June 03, 2024".
    pub date: String,
    /// Number of ranked articles the digest was built from.
    pub total_articles: usize,
    pub sections: Vec<Section<'a>>,
}

impl<'a> Digest<'a> {
    /// Build the digest from a ranked article list.
    pub fn compile(articles: &[&'a Article], settings: &DigestSettings, date: NaiveDate) -> Self {
        let mut by_category = organize_by_category(articles, settings.articles_per_section);

        let sections: Vec<Section<'a>> = Category::ALL
            .iter()
            .filter_map(|category| {
                let articles = by_category.remove(category)?;
                Some(Section {
                    category: *category,
                    summary: summarize_section(&articles, settings.summary_max_chars),
                    articles,
                })
            })
            .collect();

        info!(sections = sections.len(), "Digest compiled");

        Self {
            title: "Daily News Digest".to_string(),
            date: date.format("%B %d, %Y").to_string(),
            total_articles: articles.len(),
            sections,
        }
    }

    /// Articles placed in any section.
    pub fn included_articles(&self) -> usize {
        self.sections.iter().map(|s| s.articles.len()).sum()
    }
}

/// Bucket articles by category, keeping at most `per_section` of each.
///
/// Articles are taken in input order, then each bucket is sorted by
/// relevance score, highest first (stable).
pub fn organize_by_category<'a>(
    articles: &[&'a Article],
    per_section: usize,
) -> BTreeMap<Category, Vec<&'a Article>> {
    let mut sections: BTreeMap<Category, Vec<&'a Article>> = BTreeMap::new();
    for &article in articles {
        let bucket = sections.entry(article.category).or_default();
        if bucket.len() < per_section {
            bucket.push(article);
        }
    }
    for bucket in sections.values_mut() {
        bucket.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    // per_section == 0 leaves empty buckets behind
    sections.retain(|_, bucket| !bucket.is_empty());
    sections
}

/// Two or three sentences describing a section.
pub fn summarize_section(articles: &[&Article], max_chars: usize) -> String {
    let summary = match articles {
        [] => "No articles available for this section.".to_string(),
        [only] => format!("Featured story: {}.", only.title),
        _ => {
            let topics: Vec<String> = articles
                .iter()
                .take(2)
                .map(|a| a.title.split_whitespace().take(8).collect::<Vec<_>>().join(" "))
                .collect();

            let positive = articles
                .iter()
                .filter(|a| a.sentiment == Sentiment::Positive)
                .count();
            let negative = articles
                .iter()
                .filter(|a| a.sentiment == Sentiment::Negative)
                .count();
            let mood = match positive.cmp(&negative) {
                std::cmp::Ordering::Greater => {
                    "Overall sentiment is positive with promising developments."
                }
                std::cmp::Ordering::Less => "Several challenges and concerns are highlighted.",
                std::cmp::Ordering::Equal => {
                    "Coverage presents balanced perspectives on current events."
                }
            };

            format!(
                "This section covers {} stories including developments in {}. {}",
                articles.len(),
                topics.join(", "),
                mood
            )
        }
    };

    if summary.chars().count() <= max_chars {
        summary
    } else if max_chars < 3 {
        // No room for the ellipsis.
        summary.chars().take(max_chars).collect()
    } else {
        truncate_chars(&summary, max_chars - 3)
    }
}
