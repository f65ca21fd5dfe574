// Relevance scoring: weighted keyword density within the article's category.
//
// For every (priority, phrase) pair in the category's keyword table:
//   - each whole-word occurrence in title + body adds the tier weight
//   - a phrase present anywhere in the title adds weight * title_bonus once
// The total is divided by (body length in characters / 100) and rounded to
// two places. A zero-length body skips the division.

use crate::articles::models::Article;
use crate::lexicon::Lexicon;

use super::text::{contains_ignore_case, count_whole_word, normalize_text, round2};

/// Scores articles against a lexicon's category keyword tables.
pub struct RelevanceScorer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> RelevanceScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Compute the relevance score for one article.
    ///
    /// Articles whose category has no keyword table score 0.0.
    pub fn score(&self, article: &Article) -> f64 {
        let Some(keywords) = self.lexicon.keywords_for(article.category) else {
            return 0.0;
        };

        let text = normalize_text(&article.title, &article.body);
        let mut total = 0.0;

        for (priority, phrase) in keywords.iter() {
            let weight = self.lexicon.weights.weight(priority);
            total += count_whole_word(&text, phrase) as f64 * weight;

            // Flat bonus: presence in the title, not how often.
            if contains_ignore_case(&article.title, phrase) {
                total += weight * self.lexicon.title_bonus;
            }
        }

        let body_len = article.body.chars().count();
        if body_len > 0 {
            total /= body_len as f64 / 100.0;
        }

        round2(total)
    }
}
