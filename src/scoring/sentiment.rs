// Lexicon sentiment: compare positive and negative keyword hit counts.
//
// Raw counts over the normalized title + body, no length weighting. Ties
// (including no hits at all) are neutral.

use crate::articles::models::{Article, Sentiment};
use crate::lexicon::Lexicon;

use super::text::{count_whole_word, normalize_text};

/// Positive and negative keyword hits for one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn polarity(&self) -> Sentiment {
        match self.positive.cmp(&self.negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

/// Classifies articles using the lexicon's sentiment word lists.
pub struct SentimentAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SentimentAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Count positive and negative keyword hits.
    pub fn counts(&self, article: &Article) -> SentimentCounts {
        let text = normalize_text(&article.title, &article.body);
        let tally = |words: &[String]| -> usize {
            words.iter().map(|w| count_whole_word(&text, w)).sum()
        };
        SentimentCounts {
            positive: tally(&self.lexicon.positive),
            negative: tally(&self.lexicon.negative),
        }
    }

    pub fn classify(&self, article: &Article) -> Sentiment {
        self.counts(article).polarity()
    }
}
