// Text helpers shared by the relevance scorer and the sentiment analyzer.
//
// Whole-word matching is done with explicit boundary checks rather than a
// regex word-boundary: a match counts only when the character before it and
// the character after it are either absent (string edge) or not alphanumeric.
// Multi-word phrases are matched as one literal sequence.

/// Lowercase `title` and `body` joined by a space, with every whitespace run
/// collapsed to a single space.
pub fn normalize_text(title: &str, body: &str) -> String {
    let joined = format!("{title} {body}").to_lowercase();
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a keyword phrase the same way article text is normalized.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Count non-overlapping whole-word occurrences of `phrase` in `text`.
///
/// `text` must already be normalized; `phrase` is normalized here so callers
/// can pass lexicon entries as written ("GDP", "federal reserve").
pub fn count_whole_word(text: &str, phrase: &str) -> usize {
    let needle = normalize_phrase(phrase);
    if needle.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut start = 0;
    while let Some(offset) = text[start..].find(&needle) {
        let at = start + offset;
        let end = at + needle.len();
        if boundary_before(text, at) && boundary_after(text, end) {
            count += 1;
            start = end;
        } else {
            // Retry one character further on, like a regex scan would.
            let step = text[at..].chars().next().map_or(1, char::len_utf8);
            start = at + step;
        }
    }
    count
}

/// Case-insensitive plain substring test, no boundary checks.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Round to two decimal places, exact halves to the even neighbour.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn boundary_before(text: &str, at: usize) -> bool {
    text[..at]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

fn boundary_after(text: &str, end: usize) -> bool {
    text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric())
}
