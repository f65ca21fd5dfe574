// Article loading: JSON files and the bundled sample set.
//
// The engine itself never reads anything; these helpers hand it a ready-made
// list. Input files are a JSON array of articles. Annotation fields are
// optional in the file and default to unscored.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::models::Article;

/// The bundled sample set: 20 articles across every category and ten sources.
const SAMPLE_ARTICLES: &str = include_str!("../../data/sample_articles.json");

/// Parse a JSON array of articles.
pub fn parse_articles(json: &str) -> Result<Vec<Article>> {
    let articles: Vec<Article> =
        serde_json::from_str(json).context("Failed to parse article list JSON")?;
    Ok(articles)
}

/// Load articles from a JSON file on disk.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read articles from {}", path.display()))?;
    let articles = parse_articles(&json)
        .with_context(|| format!("Invalid article file {}", path.display()))?;
    info!(count = articles.len(), path = %path.display(), "Loaded articles");
    Ok(articles)
}

/// Load the bundled sample set.
pub fn sample_articles() -> Result<Vec<Article>> {
    parse_articles(SAMPLE_ARTICLES).context("Bundled sample articles are malformed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::models::Category;

    #[test]
    fn sample_set_parses() {
        let articles = sample_articles().unwrap();
        assert_eq!(articles.len(), 20);
        for category in Category::ALL {
            assert!(
                articles.iter().any(|a| a.category == category),
                "sample set has no {category} article"
            );
        }
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = load_articles(Path::new("/nonexistent/articles.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/articles.json"));
    }

    #[test]
    fn parse_rejects_non_array() {
        assert!(parse_articles("{\"title\": \"x\"}").is_err());
    }
}
