// Unit tests for similarity and duplicate resolution.
//
// Covers the similarity contract (symmetry, bounds, reflexivity, title
// dominance) over the bundled sample set and hand-built pairs, plus the
// resolver's counting and survivor rules.

use newsdigest::articles::load::sample_articles;
use newsdigest::articles::models::{Article, Category};
use newsdigest::dedup::resolver::DuplicateResolver;
use newsdigest::dedup::similarity::{matching_ratio, SimilarityMeasure, TitleWeightedSimilarity};
use newsdigest::lexicon::Lexicon;

fn article(title: &str, body: &str) -> Article {
    Article::new(title, body, Category::Finance, "Wire")
}

const SHARED_BODY: &str = "Policymakers pointed to a cooling labour market and sticky prices \
                           as they weighed the timing of the first reduction.";

// ============================================================
// Similarity contract
// ============================================================

#[test]
fn similarity_symmetric_and_bounded_over_samples() {
    let measure = TitleWeightedSimilarity::default();
    let articles = sample_articles().unwrap();
    for a in &articles {
        assert_eq!(measure.similarity(a, a), 1.0, "not reflexive: {}", a.title);
        for b in &articles {
            let ab = measure.similarity(a, b);
            let ba = measure.similarity(b, a);
            assert_eq!(ab, ba, "asymmetric: {} / {}", a.title, b.title);
            assert!((0.0..=1.0).contains(&ab), "out of bounds: {ab}");
        }
    }
}

#[test]
fn inserted_word_headlines_are_duplicates() {
    let measure = TitleWeightedSimilarity::default();
    let a = article("Fed Signals Rate Cuts Amid Uncertainty", SHARED_BODY);
    let b = article("Fed Signals Rate Cuts Amid Economic Uncertainty", SHARED_BODY);
    let similarity = measure.similarity(&a, &b);
    assert!(similarity >= 0.7, "got {similarity}");
}

#[test]
fn identical_headlines_with_different_bodies_still_match() {
    let measure = TitleWeightedSimilarity::default();
    let a = article("Fed Signals Rate Cuts", "qqqq qqqq qqqq");
    let b = article("Fed Signals Rate Cuts", "zzzz zzzz zzzz");
    assert!(measure.similarity(&a, &b) >= 0.7);
}

#[test]
fn identical_bodies_with_different_headlines_do_not_match() {
    let measure = TitleWeightedSimilarity::default();
    let a = article("Fed Signals Rate Cuts", SHARED_BODY);
    let b = article("Volcano Erupts Overnight", SHARED_BODY);
    assert!(measure.similarity(&a, &b) < 0.7);
}

#[test]
fn ratio_is_case_sensitive_but_measure_is_not() {
    assert!(matching_ratio("RATE", "rate") < 1.0);
    let measure = TitleWeightedSimilarity::default();
    let a = article("RATE CUTS", "BODY");
    let b = article("rate cuts", "body");
    assert_eq!(measure.similarity(&a, &b), 1.0);
}

/// Two paraphrased reports of the same rate decision, each over 200 chars.
const PARAPHRASE_A: &str = "The central bank left its benchmark interest rate unchanged on Wednesday, \
                            saying that inflation remains above target while the labour market is still \
                            tight, and officials signalled that any reduction would depend on incoming data over the coming months.";
const PARAPHRASE_B: &str = "Policymakers at the central bank kept the key lending rate where it was on Wednesday, \
                            noting that price growth is still running hot and hiring has stayed firm, and they \
                            said future cuts would hinge on the economic figures released in the months ahead.";

#[test]
fn paraphrased_long_bodies_share_little() {
    // Spaces and common letters are too frequent in a 200-char prefix to
    // seed blocks, so loosely worded bodies match poorly.
    let a: String = PARAPHRASE_A.chars().take(200).collect::<String>().to_lowercase();
    let b: String = PARAPHRASE_B.chars().take(200).collect::<String>().to_lowercase();
    assert!((matching_ratio(&a, &b) - 0.11).abs() < 1e-9);
}

#[test]
fn near_identical_titles_with_paraphrased_bodies_stay_apart() {
    let measure = TitleWeightedSimilarity::default();
    let a = article("Central bank holds rates steady", PARAPHRASE_A);
    let b = article("Central bank holds key rates steady", PARAPHRASE_B);
    let similarity = measure.similarity(&a, &b);
    // 0.7 * 31/33 + 0.3 * 0.11 is about 0.69, just under the threshold.
    assert!(similarity < 0.7, "got {similarity}");
    assert!(similarity > 0.68, "got {similarity}");

    let resolver = DuplicateResolver::from_lexicon(&Lexicon::default());
    let docs = [a, b];
    let refs: Vec<&Article> = docs.iter().collect();
    assert_eq!(resolver.resolve(&refs).removed, 0);
}

// ============================================================
// Resolution
// ============================================================

#[test]
fn near_duplicates_collapse_to_one() {
    let resolver = DuplicateResolver::from_lexicon(&Lexicon::default());
    let mut a = article("Fed Signals Rate Cuts Amid Uncertainty", SHARED_BODY);
    let mut b = article("Fed Signals Rate Cuts Amid Economic Uncertainty", SHARED_BODY);
    a.relevance_score = 1.0;
    b.relevance_score = 2.0;
    let c = article("Volcano Erupts Overnight", "Lava reached the coast by morning.");

    let docs = [a, b, c];
    let refs: Vec<&Article> = docs.iter().collect();
    let resolution = resolver.resolve(&refs);

    assert_eq!(resolution.survivors.len(), 2);
    assert_eq!(resolution.removed, 1);
    assert_eq!(resolution.groups.len(), 1);
    let titles: Vec<&str> = resolution.survivors.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Fed Signals Rate Cuts Amid Economic Uncertainty", "Volcano Erupts Overnight"]
    );
}

#[test]
fn counts_add_up_and_survivors_dominate() {
    let lexicon = Lexicon::default();
    let resolver = DuplicateResolver::from_lexicon(&lexicon);
    let mut docs = sample_articles().unwrap();
    // Duplicate every third article with a lower score so groups exist.
    let extra: Vec<Article> = docs
        .iter()
        .step_by(3)
        .map(|a| {
            let mut copy = a.clone();
            copy.relevance_score = -1.0;
            copy
        })
        .collect();
    docs.extend(extra);
    for (i, doc) in docs.iter_mut().enumerate() {
        if doc.relevance_score == 0.0 {
            doc.relevance_score = (i % 7) as f64;
        }
    }

    let refs: Vec<&Article> = docs.iter().collect();
    let resolution = resolver.resolve(&refs);

    assert!(resolution.survivors.len() <= docs.len());
    assert_eq!(resolution.removed + resolution.survivors.len(), docs.len());
    assert!(!resolution.groups.is_empty());
    for group in &resolution.groups {
        assert!(group.members.len() >= 2);
        let best = group.survivor().relevance_score;
        for removed in group.removed() {
            assert!(best >= removed.relevance_score);
        }
    }
}

#[test]
fn stricter_threshold_merges_less() {
    let loose = DuplicateResolver::new(TitleWeightedSimilarity::default(), 0.3);
    let strict = DuplicateResolver::new(TitleWeightedSimilarity::default(), 0.99);
    let docs = sample_articles().unwrap();
    let refs: Vec<&Article> = docs.iter().collect();
    assert!(loose.resolve(&refs).removed >= strict.resolve(&refs).removed);
    assert_eq!(strict.resolve(&refs).removed, 0);
}
