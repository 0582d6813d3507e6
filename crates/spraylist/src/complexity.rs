//! Complexity scoring, deduplication, and ordering of candidates.
//!
//! The score is a heuristic used purely for ordering wordlists. It weighs a
//! string's length, case mix, digits, special characters, spaces, and
//! repeated characters. Repeated characters raise the score: the repeat term
//! carries a negative weight and is then subtracted, and rankings produced by
//! earlier releases depend on that arithmetic.

use std::collections::HashSet;

const LENGTH_WEIGHT: i64 = 1;
const UPPERCASE_WEIGHT: i64 = 2;
const LOWERCASE_WEIGHT: i64 = 1;
const DIGIT_WEIGHT: i64 = 3;
const SPECIAL_WEIGHT: i64 = 4;
const SPACE_WEIGHT: i64 = 2;
const REPEAT_WEIGHT: i64 = -2;

/// Per-component character counts behind a complexity score.
///
/// Uppercase, lowercase, and digit counts cover ASCII only. Non-ASCII digits
/// such as `٣` and non-ASCII letters add to the length alone, and combining
/// marks are not specials, so scripts outside ASCII score lower than a
/// Unicode-aware classifier would rate them.
///
/// # Example
///
/// ```
/// use spraylist::ComplexityBreakdown;
///
/// let breakdown = ComplexityBreakdown::of("P@ss1");
///
/// assert_eq!(breakdown.uppercase, 1);
/// assert_eq!(breakdown.specials, 1);
/// assert_eq!(breakdown.repeats, 1);
/// assert_eq!(breakdown.total(), 18);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexityBreakdown {
    /// Number of characters.
    pub length: usize,
    /// ASCII uppercase letters.
    pub uppercase: usize,
    /// ASCII lowercase letters.
    pub lowercase: usize,
    /// ASCII digits.
    pub digits: usize,
    /// Characters that are not alphanumeric, plus underscores.
    pub specials: usize,
    /// Literal space characters.
    pub spaces: usize,
    /// Occurrences beyond the first of each distinct character.
    pub repeats: usize,
}

impl ComplexityBreakdown {
    /// Counts the score components of `s` in a single pass.
    #[must_use]
    pub fn of(s: &str) -> Self {
        let mut breakdown = Self::default();
        let mut seen = HashSet::new();

        for c in s.chars() {
            breakdown.length += 1;
            if c.is_ascii_uppercase() {
                breakdown.uppercase += 1;
            } else if c.is_ascii_lowercase() {
                breakdown.lowercase += 1;
            } else if c.is_ascii_digit() {
                breakdown.digits += 1;
            }
            if is_special(c) {
                breakdown.specials += 1;
            }
            if c == ' ' {
                breakdown.spaces += 1;
            }
            if !seen.insert(c) {
                breakdown.repeats += 1;
            }
        }

        breakdown
    }

    /// Combines the components into the complexity score.
    #[must_use]
    pub fn total(&self) -> i64 {
        let repeat_score = weighted(self.repeats, REPEAT_WEIGHT);

        weighted(self.length, LENGTH_WEIGHT)
            + weighted(self.uppercase, UPPERCASE_WEIGHT)
            + weighted(self.lowercase, LOWERCASE_WEIGHT)
            + weighted(self.digits, DIGIT_WEIGHT)
            + weighted(self.specials, SPECIAL_WEIGHT)
            + weighted(self.spaces, SPACE_WEIGHT)
            - repeat_score
    }
}

/// Scores a string's complexity.
///
/// # Example
///
/// ```
/// use spraylist::score;
///
/// assert_eq!(score("ab"), 4);
/// assert_eq!(score("aabb"), 12);
/// ```
#[must_use]
pub fn score(s: &str) -> i64 {
    ComplexityBreakdown::of(s).total()
}

/// Duplicate handling applied before ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DedupMode {
    /// Keep every entry.
    #[default]
    None,
    /// Drop exact repeats.
    CaseSensitive,
    /// Drop repeats that match after ASCII lower-casing.
    CaseInsensitive,
}

/// Removes later duplicates, keeping the first occurrence in place.
///
/// Case-insensitive mode compares ASCII-lower-cased forms only and keeps the
/// spelling of the first occurrence.
///
/// # Example
///
/// ```
/// use spraylist::{DedupMode, deduplicate};
///
/// let input = vec!["A".to_owned(), "a".to_owned(), "B".to_owned(), "A".to_owned()];
///
/// assert_eq!(deduplicate(input.clone(), DedupMode::CaseSensitive), ["A", "a", "B"]);
/// assert_eq!(deduplicate(input, DedupMode::CaseInsensitive), ["A", "B"]);
/// ```
#[must_use]
pub fn deduplicate(strings: Vec<String>, mode: DedupMode) -> Vec<String> {
    match mode {
        DedupMode::None => strings,
        DedupMode::CaseSensitive => retain_first(strings, str::to_owned),
        DedupMode::CaseInsensitive => retain_first(strings, str::to_ascii_lowercase),
    }
}

/// Orders strings by ascending complexity score.
///
/// The sort is stable with no secondary key, so equal scores keep their input
/// order.
///
/// # Example
///
/// ```
/// use spraylist::rank;
///
/// let ranked = rank(vec!["zz".to_owned(), "a".to_owned(), "mmm".to_owned()]);
///
/// assert_eq!(ranked, ["a", "zz", "mmm"]);
/// ```
#[must_use]
pub fn rank(mut strings: Vec<String>) -> Vec<String> {
    strings.sort_by_cached_key(|s| score(s));
    strings
}

fn is_special(c: char) -> bool {
    c == '_' || !c.is_alphanumeric()
}

fn weighted(count: usize, weight: i64) -> i64 {
    i64::try_from(count)
        .unwrap_or(i64::MAX)
        .saturating_mul(weight)
}

fn retain_first<F>(strings: Vec<String>, key: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    let mut seen = HashSet::with_capacity(strings.len());
    strings
        .into_iter()
        .filter(|candidate| seen.insert(key(candidate.as_str())))
        .collect()
}
