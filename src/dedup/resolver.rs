// Greedy seed-anchored duplicate grouping.
//
// Walk the articles in input order. Each article not yet grouped becomes a
// seed; every later ungrouped article whose similarity to the seed reaches
// the threshold joins the seed's group. Members are compared against the seed
// only, never against each other, so grouping is not a transitive closure:
// a chain A~B, B~C with A!~C puts C in B's group (or leaves it alone), not
// in A's.
//
// A group of one is not a duplicate group. In each real group the member with
// the highest relevance score survives; ties go to the earliest member.

use tracing::{debug, info};

use crate::articles::models::Article;
use crate::lexicon::Lexicon;

use super::similarity::{SimilarityMeasure, TitleWeightedSimilarity};

/// A set of two or more articles judged to be the same story.
#[derive(Debug, Clone)]
pub struct DuplicateGroup<'a> {
    /// Members in input order; the seed is first.
    pub members: Vec<&'a Article>,
    /// Positions of the members in the resolver's input slice.
    pub positions: Vec<usize>,
    /// Index into `members` of the article that is kept.
    pub survivor: usize,
}

impl<'a> DuplicateGroup<'a> {
    pub fn seed(&self) -> &'a Article {
        self.members[0]
    }

    pub fn survivor(&self) -> &'a Article {
        self.members[self.survivor]
    }

    /// Members dropped in favour of the survivor.
    pub fn removed(&self) -> impl Iterator<Item = &'a Article> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.survivor)
            .map(|(_, article)| *article)
    }
}

/// Result of a resolution pass.
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    /// Kept articles in their original relative order.
    pub survivors: Vec<&'a Article>,
    pub groups: Vec<DuplicateGroup<'a>>,
    /// Input size minus survivor count.
    pub removed: usize,
}

/// Groups near-duplicate articles and keeps one per group.
pub struct DuplicateResolver<M = TitleWeightedSimilarity> {
    measure: M,
    threshold: f64,
}

impl DuplicateResolver<TitleWeightedSimilarity> {
    /// Default similarity measure with the lexicon's similarity threshold.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self::new(TitleWeightedSimilarity::default(), lexicon.thresholds.similarity)
    }
}

impl<M: SimilarityMeasure> DuplicateResolver<M> {
    pub fn new(measure: M, threshold: f64) -> Self {
        Self { measure, threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Find the duplicate groups in `articles` without choosing survivors.
    ///
    /// Returns member positions per group, seed first.
    pub fn detect(&self, articles: &[&Article]) -> Vec<Vec<usize>> {
        let mut assigned = vec![false; articles.len()];
        let mut groups = Vec::new();

        for seed in 0..articles.len() {
            if assigned[seed] {
                continue;
            }
            assigned[seed] = true;
            let mut group = vec![seed];

            for candidate in (seed + 1)..articles.len() {
                if assigned[candidate] {
                    continue;
                }
                let similarity = self
                    .measure
                    .similarity(articles[seed], articles[candidate]);
                if similarity >= self.threshold {
                    debug!(
                        seed = %articles[seed].title,
                        candidate = %articles[candidate].title,
                        similarity,
                        "Similar articles"
                    );
                    assigned[candidate] = true;
                    group.push(candidate);
                }
            }

            if group.len() > 1 {
                groups.push(group);
            }
        }

        groups
    }

    /// Remove duplicates, keeping the highest-scoring member of each group.
    ///
    /// Scores must already be set: survivor choice reads `relevance_score`.
    pub fn resolve<'a>(&self, articles: &[&'a Article]) -> Resolution<'a> {
        let mut removed_flags = vec![false; articles.len()];
        let mut groups = Vec::new();

        for positions in self.detect(articles) {
            let members: Vec<&'a Article> = positions.iter().map(|&p| articles[p]).collect();

            // Strict comparison keeps the earliest member on ties.
            let mut survivor = 0;
            for (i, member) in members.iter().enumerate().skip(1) {
                if member.relevance_score > members[survivor].relevance_score {
                    survivor = i;
                }
            }

            for (i, &position) in positions.iter().enumerate() {
                if i != survivor {
                    removed_flags[position] = true;
                    info!(
                        removed = %members[i].title,
                        kept = %members[survivor].title,
                        "Removing duplicate article"
                    );
                }
            }

            groups.push(DuplicateGroup {
                members,
                positions,
                survivor,
            });
        }

        let survivors: Vec<&'a Article> = articles
            .iter()
            .zip(&removed_flags)
            .filter(|(_, removed)| !**removed)
            .map(|(article, _)| *article)
            .collect();

        Resolution {
            removed: articles.len() - survivors.len(),
            survivors,
            groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::models::Category;

    /// Similarity driven entirely by a lookup on title pairs.
    struct TableSimilarity(Vec<(&'static str, &'static str)>);

    impl SimilarityMeasure for TableSimilarity {
        fn similarity(&self, a: &Article, b: &Article) -> f64 {
            let hit = self.0.iter().any(|(x, y)| {
                (a.title == *x && b.title == *y) || (a.title == *y && b.title == *x)
            });
            if hit || a.title == b.title {
                1.0
            } else {
                0.0
            }
        }
    }

    fn scored(title: &str, score: f64) -> Article {
        let mut article = Article::new(title, "", Category::TopStories, "Wire");
        article.relevance_score = score;
        article
    }

    #[test]
    fn grouping_is_anchored_to_seed() {
        // A~B and B~C, but A!~C: C is not pulled into A's group.
        let resolver = DuplicateResolver::new(TableSimilarity(vec![("A", "B"), ("B", "C")]), 0.7);
        let docs = [scored("A", 1.0), scored("B", 1.0), scored("C", 1.0)];
        let refs: Vec<&Article> = docs.iter().collect();
        assert_eq!(resolver.detect(&refs), vec![vec![0, 1]]);

        let resolution = resolver.resolve(&refs);
        let titles: Vec<&str> = resolution.survivors.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(resolution.removed, 1);
    }

    #[test]
    fn highest_score_survives() {
        let resolver = DuplicateResolver::new(TableSimilarity(vec![("A", "B")]), 0.7);
        let docs = [scored("A", 0.5), scored("X", 9.0), scored("B", 2.0)];
        let refs: Vec<&Article> = docs.iter().collect();
        let resolution = resolver.resolve(&refs);

        let titles: Vec<&str> = resolution.survivors.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["X", "B"]);
        let group = &resolution.groups[0];
        assert_eq!(group.survivor().title, "B");
        assert_eq!(group.seed().title, "A");
        assert_eq!(group.positions, vec![0, 2]);
        assert_eq!(group.removed().map(|a| a.title.as_str()).collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn ties_keep_first_occurrence() {
        let resolver = DuplicateResolver::new(TableSimilarity(vec![]), 0.7);
        let docs = [scored("Same", 1.0), scored("Same", 1.0), scored("Same", 1.0)];
        let refs: Vec<&Article> = docs.iter().collect();
        let resolution = resolver.resolve(&refs);
        assert_eq!(resolution.survivors.len(), 1);
        assert!(std::ptr::eq(resolution.survivors[0], &docs[0]));
        assert_eq!(resolution.removed, 2);
    }

    #[test]
    fn empty_input() {
        let resolver = DuplicateResolver::from_lexicon(&Lexicon::default());
        let resolution = resolver.resolve(&[]);
        assert!(resolution.survivors.is_empty());
        assert!(resolution.groups.is_empty());
        assert_eq!(resolution.removed, 0);
    }

    #[test]
    fn threshold_comes_from_lexicon() {
        let resolver = DuplicateResolver::from_lexicon(&Lexicon::default());
        assert_eq!(resolver.threshold(), 0.7);
    }
}
