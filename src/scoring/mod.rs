// Scoring: keyword relevance and lexicon sentiment for single articles.

pub mod relevance;
pub mod sentiment;
pub mod text;
