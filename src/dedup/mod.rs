// Duplicate detection: pairwise similarity and seed-anchored grouping.

pub mod resolver;
pub mod similarity;
