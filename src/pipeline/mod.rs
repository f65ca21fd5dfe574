// Pipeline: filter, score, deduplicate and rank an article list.

pub mod filter;
