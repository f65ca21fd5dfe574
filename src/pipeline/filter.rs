// The filter pipeline.
//
// Stages, each skipped when its filter is empty:
//   1. keyword: keep if any keyword is a case-insensitive substring of title + body
//   2. category: keep if the category is in the allowed set
//   3. source: keep if the source is in the allowed set
// Then every remaining article is scored and classified, duplicates are
// resolved (unless disabled), and the result is sorted by score, highest
// first, with ties left in their current order.
//
// Scoring runs on every candidate before duplicate resolution because the
// resolver picks survivors by relevance score.

use std::cmp::Ordering;

use tracing::info;

use crate::articles::models::{Article, Category};
use crate::dedup::resolver::{DuplicateGroup, DuplicateResolver};
use crate::lexicon::Lexicon;
use crate::scoring::relevance::RelevanceScorer;
use crate::scoring::sentiment::SentimentAnalyzer;

/// Per-run filter settings. Empty lists disable their stage.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub keywords: Vec<String>,
    pub categories: Vec<Category>,
    pub sources: Vec<String>,
    /// Run duplicate resolution after scoring.
    pub dedup: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            categories: Vec::new(),
            sources: Vec::new(),
            dedup: true,
        }
    }
}

/// How many articles were left after each stage that ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub input: usize,
    pub after_keyword: Option<usize>,
    pub after_category: Option<usize>,
    pub after_source: Option<usize>,
    pub after_dedup: Option<usize>,
}

/// The ranked, annotated articles of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput<'a> {
    /// Surviving articles, highest relevance first.
    pub articles: Vec<&'a Article>,
    pub duplicates_removed: usize,
    pub groups: Vec<DuplicateGroup<'a>>,
    pub stages: StageCounts,
}

impl PipelineOutput<'_> {
    /// Mean relevance score of the output, 0.0 when empty.
    pub fn average_score(&self) -> f64 {
        if self.articles.is_empty() {
            return 0.0;
        }
        let total: f64 = self.articles.iter().map(|a| a.relevance_score).sum();
        total / self.articles.len() as f64
    }

    /// Article count per category, most common first. Equal counts keep the
    /// order in which the categories first appear in the output.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let mut counts: Vec<(Category, usize)> = Vec::new();
        for article in &self.articles {
            match counts.iter_mut().find(|(c, _)| *c == article.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((article.category, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

/// Filters, scores, deduplicates and ranks articles against one lexicon.
pub struct FilterPipeline<'l> {
    scorer: RelevanceScorer<'l>,
    analyzer: SentimentAnalyzer<'l>,
    resolver: DuplicateResolver,
}

impl<'l> FilterPipeline<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self {
            scorer: RelevanceScorer::new(lexicon),
            analyzer: SentimentAnalyzer::new(lexicon),
            resolver: DuplicateResolver::from_lexicon(lexicon),
        }
    }

    /// Run the full pipeline.
    ///
    /// The slice itself is never reordered or shrunk; only the annotation
    /// fields of the articles that pass the filters are written. The output
    /// borrows the surviving articles from `articles`.
    pub fn run<'a>(&self, articles: &'a mut [Article], options: &FilterOptions) -> PipelineOutput<'a> {
        let mut stages = StageCounts {
            input: articles.len(),
            ..StageCounts::default()
        };
        info!(count = stages.input, "Starting article processing");

        let mut selected: Vec<&'a mut Article> = articles.iter_mut().collect();

        if !options.keywords.is_empty() {
            let keywords: Vec<String> = options.keywords.iter().map(|k| k.to_lowercase()).collect();
            selected.retain(|a| matches_any_keyword(a, &keywords));
            stages.after_keyword = Some(selected.len());
            info!(count = selected.len(), "After keyword filtering");
        }

        if !options.categories.is_empty() {
            selected.retain(|a| options.categories.contains(&a.category));
            stages.after_category = Some(selected.len());
            info!(count = selected.len(), "After category filtering");
        }

        if !options.sources.is_empty() {
            selected.retain(|a| options.sources.iter().any(|s| *s == a.source));
            stages.after_source = Some(selected.len());
            info!(count = selected.len(), "After source filtering");
        }

        for article in selected.iter_mut() {
            let score = self.scorer.score(article);
            let sentiment = self.analyzer.classify(article);
            article.relevance_score = score;
            article.sentiment = sentiment;
            article.processed = true;
        }

        let mut ranked: Vec<&'a Article> = Vec::with_capacity(selected.len());
        for article in selected {
            ranked.push(article);
        }
        let mut groups = Vec::new();
        let mut duplicates_removed = 0;

        if options.dedup {
            let resolution = self.resolver.resolve(&ranked);
            ranked = resolution.survivors;
            groups = resolution.groups;
            duplicates_removed = resolution.removed;
            stages.after_dedup = Some(ranked.len());
            info!(count = ranked.len(), removed = duplicates_removed, "After duplicate removal");
        }

        // Stable: equal scores keep their current relative order.
        ranked.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });

        info!(count = ranked.len(), "Article processing completed");

        PipelineOutput {
            articles: ranked,
            duplicates_removed,
            groups,
            stages,
        }
    }
}

/// Plain substring match, unlike the boundary-anchored scoring match.
/// `keywords` must already be lowercase.
fn matches_any_keyword(article: &Article, keywords: &[String]) -> bool {
    let text = format!("{} {}", article.title, article.body).to_lowercase();
    keywords.iter().any(|k| text.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, body: &str, category: Category, source: &str) -> Article {
        Article::new(title, body, category, source)
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let lexicon = Lexicon::default();
        let pipeline = FilterPipeline::new(&lexicon);
        let mut articles: Vec<Article> = Vec::new();
        let output = pipeline.run(&mut articles, &FilterOptions::default());
        assert!(output.articles.is_empty());
        assert_eq!(output.duplicates_removed, 0);
        assert_eq!(output.stages.input, 0);
        assert_eq!(output.average_score(), 0.0);
    }

    #[test]
    fn keyword_filter_is_substring_match() {
        let lexicon = Lexicon::default();
        let pipeline = FilterPipeline::new(&lexicon);
        let mut articles = vec![
            article("Said plainly", "nothing here", Category::Technology, "A"),
            article("Other", "unrelated", Category::Technology, "A"),
        ];
        let options = FilterOptions {
            keywords: vec!["AI".to_string()],
            ..FilterOptions::default()
        };
        let output = pipeline.run(&mut articles, &options);
        // "ai" is inside "said": substring filters keep it.
        assert_eq!(output.articles.len(), 1);
        assert_eq!(output.articles[0].title, "Said plainly");
        assert_eq!(output.stages.after_keyword, Some(1));
        assert_eq!(output.stages.after_category, None);
    }

    #[test]
    fn filtered_out_articles_stay_unscored() {
        let lexicon = Lexicon::default();
        let pipeline = FilterPipeline::new(&lexicon);
        let mut articles = vec![
            article("Inflation climbs", "inflation and growth", Category::Finance, "A"),
            article("Campaign trail", "voting begins", Category::Politics, "B"),
        ];
        let options = FilterOptions {
            sources: vec!["A".to_string()],
            ..FilterOptions::default()
        };
        let kept = pipeline.run(&mut articles, &options).articles.len();
        assert_eq!(kept, 1);
        assert!(articles[0].processed);
        assert!(articles[0].relevance_score > 0.0);
        assert!(!articles[1].processed);
        assert_eq!(articles[1].relevance_score, 0.0);
    }

    #[test]
    fn category_counts_most_common_first() {
        let lexicon = Lexicon::default();
        let pipeline = FilterPipeline::new(&lexicon);
        let mut articles = vec![
            article("One", "a", Category::Health, "A"),
            article("Two", "b", Category::Finance, "A"),
            article("Three", "c", Category::Finance, "A"),
        ];
        let output = pipeline.run(&mut articles, &FilterOptions::default());
        assert_eq!(
            output.category_counts(),
            vec![(Category::Finance, 2), (Category::Health, 1)]
        );
    }
}
