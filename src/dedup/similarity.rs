// Lexical similarity between two articles.
//
// The building block is a matching-characters ratio: find the longest common
// contiguous block, recurse on the pieces to its left and right, sum the
// matched lengths M and report 2*M / (len(a) + len(b)). Two empty strings are
// identical (1.0).
//
// When the second string is at least 200 characters long, characters that
// occur in it more than len/100 + 1 times are "popular" and are not used to
// seed blocks. A block found through other characters is still extended over
// popular ones on either side. On short strings nothing is pruned.
//
// Articles are compared on lowercase titles and on the lowercase first 200
// characters of the body, weighted 0.7 / 0.3 so that headline agreement
// dominates.

use std::collections::HashMap;

use crate::articles::models::Article;

/// Length of `b` from which popular characters are pruned.
const POPULAR_MIN_LEN: usize = 200;

/// A symmetric similarity in [0, 1] between two articles.
///
/// Swap-ready like the scorers: the resolver only depends on this trait.
pub trait SimilarityMeasure {
    fn similarity(&self, a: &Article, b: &Article) -> f64;
}

/// Title-dominated blend of title and body-prefix matching ratios.
#[derive(Debug, Clone)]
pub struct TitleWeightedSimilarity {
    pub title_weight: f64,
    pub content_weight: f64,
    /// How many leading body characters take part in the comparison.
    pub content_prefix_chars: usize,
}

impl Default for TitleWeightedSimilarity {
    fn default() -> Self {
        Self {
            title_weight: 0.7,
            content_weight: 0.3,
            content_prefix_chars: 200,
        }
    }
}

impl TitleWeightedSimilarity {
    fn body_prefix(&self, body: &str) -> String {
        body.chars()
            .take(self.content_prefix_chars)
            .collect::<String>()
            .to_lowercase()
    }
}

impl SimilarityMeasure for TitleWeightedSimilarity {
    fn similarity(&self, a: &Article, b: &Article) -> f64 {
        let title_ratio = matching_ratio(&a.title.to_lowercase(), &b.title.to_lowercase());
        let content_ratio = matching_ratio(&self.body_prefix(&a.body), &self.body_prefix(&b.body));
        let combined = title_ratio * self.title_weight + content_ratio * self.content_weight;
        combined.clamp(0.0, 1.0)
    }
}

/// Matching-characters ratio `2*M / T` between two strings.
///
/// The longest-block search breaks ties by position, and popular-character
/// pruning looks at the second string only, so the raw algorithm is
/// order-sensitive. Arguments are put in a canonical order first so
/// `matching_ratio(a, b) == matching_ratio(b, a)` always holds. That ordering
/// is a deliberate departure from the classic one-directional ratio, which
/// prunes whichever string happens to come second and so can score `(a, b)`
/// and `(b, a)` differently.
pub fn matching_ratio(a: &str, b: &str) -> f64 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

/// Total length of the matching blocks between `a` and `b`.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    // Positions of every character in b, ascending.
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }
    if b.len() >= POPULAR_MIN_LEN {
        let limit = b.len() / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= limit);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, &b2j, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)`. Among equally long blocks the one starting earliest
/// in `a` wins, then the one starting earliest in `b`. The winner is then
/// widened over equal neighbours, which recovers popular characters that
/// `b2j` leaves out.
fn longest_match(
    a: &[char],
    b: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run_len[j] = length of the common block ending at a[i-1], b[j]
    let mut run_len: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_run_len = HashMap::new();
        if let Some(positions) = b2j.get(c) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| run_len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_run_len.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        run_len = next_run_len;
    }

    while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
        best_i -= 1;
        best_j -= 1;
        best_size += 1;
    }
    while best_i + best_size < ahi
        && best_j + best_size < bhi
        && a[best_i + best_size] == b[best_j + best_size]
    {
        best_size += 1;
    }

    (best_i, best_j, best_size)
}
