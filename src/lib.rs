// newsdigest: relevance scoring, sentiment tagging and duplicate pruning
// for news digests.
//
// This is the library root. The engine lives in scoring, dedup and pipeline;
// articles, digest, output and config are the pieces around it that the CLI
// wires together.

pub mod articles;
pub mod config;
pub mod dedup;
pub mod digest;
pub mod lexicon;
pub mod output;
pub mod pipeline;
pub mod scoring;
