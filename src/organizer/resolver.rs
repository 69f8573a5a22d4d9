//! # Command Resolver
//!
//! Suggests known verbs for a mistyped one. Similarity is the matching-block
//! ratio `2 * M / T`, where `M` counts characters covered by the longest common
//! blocks (found recursively left and right of each longest match) and `T` is
//! the combined length of both strings. This is the same measure Python's
//! `difflib.SequenceMatcher.ratio` reports; it is not an edit distance.

use std::collections::HashMap;

pub const DEFAULT_MAX_SUGGESTIONS: usize = 2;
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, size)`.
///
/// Ties go to the block starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // j2len[j] = length of the match ending at a[i - 1], b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(ch) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        j2len = next;
    }
    (best_i, best_j, best_size)
}

/// Number of characters covered by matching blocks.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        b2j.entry(*ch).or_default().push(j);
    }

    let mut matched = 0;
    let mut queue = vec![((0, a.len()), (0, b.len()))];
    while let Some(((alo, ahi), (blo, bhi))) = queue.pop() {
        let (i, j, k) = longest_match(a, &b2j, (alo, ahi), (blo, bhi));
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            queue.push(((alo, i), (blo, j)));
        }
        if i + k < ahi && j + k < bhi {
            queue.push(((i + k, ahi), (j + k, bhi)));
        }
    }
    matched
}

/// Similarity of two strings in `[0.0, 1.0]`. Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

/// Up to `n` vocabulary entries whose ratio against `word` is at least `cutoff`,
/// best first. Equal scores are ordered by candidate, descending.
pub fn get_close_matches<'a, I>(word: &str, vocabulary: I, n: usize, cutoff: f64) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    if n == 0 {
        return Vec::new();
    }
    let mut scored: Vec<(f64, &str)> = vocabulary
        .into_iter()
        .map(|candidate| (ratio(candidate, word), candidate))
        .filter(|(score, _)| *score >= cutoff)
        .collect();
    scored.sort_by(|(sa, ca), (sb, cb)| sb.total_cmp(sa).then_with(|| cb.cmp(ca)));
    scored
        .into_iter()
        .take(n)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolver {
    vocabulary: Vec<String>,
    max_suggestions: usize,
    cutoff: f64,
}

impl Resolver {
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self {
            vocabulary,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            cutoff: DEFAULT_CUTOFF,
        }
    }

    pub fn with_limits(mut self, max_suggestions: usize, cutoff: f64) -> Self {
        self.max_suggestions = max_suggestions;
        self.cutoff = cutoff;
        self
    }

    /// Closest known verbs for `word`. Empty means "not found".
    pub fn resolve(&self, word: &str) -> Vec<String> {
        get_close_matches(
            word,
            self.vocabulary.iter().map(String::as_str),
            self.max_suggestions,
            self.cutoff,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCAB: &[&str] = &[
        "add", "add-note", "add-tag", "add-phone", "all", "birthdays", "change", "delete-note",
        "show-notes", "sort-notes",
    ];

    #[test]
    fn ratio_matches_difflib_values() {
        assert_eq!(ratio("abcd", "bcde"), 0.75);
        assert_eq!(ratio("add-note", "add-not"), 14.0 / 15.0);
        assert_eq!(ratio("", ""), 1.0);
        assert_eq!(ratio("abc", ""), 0.0);
        assert_eq!(ratio("zzz", "add"), 0.0);
    }

    #[test]
    fn ratio_counts_blocks_on_both_sides() {
        // "qabxcd" vs "abycdf": blocks "ab" and "cd"
        assert!((ratio("qabxcd", "abycdf") - 8.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn typo_resolves_to_known_verb() {
        let found = get_close_matches("add-not", VOCAB.iter().copied(), 2, 0.6);
        assert_eq!(found[0], "add-note");
        assert!(found.len() <= 2);
    }

    #[test]
    fn garbage_resolves_to_nothing() {
        assert!(get_close_matches("zzz", VOCAB.iter().copied(), 2, 0.6).is_empty());
    }

    #[test]
    fn equal_scores_prefer_later_candidate() {
        let found = get_close_matches("ab", ["ax", "ay"], 2, 0.5);
        assert_eq!(found, vec!["ay", "ax"]);
    }

    #[test]
    fn resolver_applies_limits() {
        let resolver = Resolver::new(VOCAB.iter().map(|s| s.to_string()).collect());
        assert_eq!(resolver.resolve("birthday"), vec!["birthdays"]);
        let one = resolver.clone().with_limits(1, 0.6).resolve("add-tg");
        assert_eq!(one, vec!["add-tag"]);
    }
}
