//! Username permutations derived from display names.
//!
//! Every name is lower-cased and split on the literal space character. All
//! names yield the three separator variants; names with at least two tokens
//! additionally yield twelve first/last-name combinations. When a domain is
//! supplied the whole candidate list is mirrored as email addresses after the
//! bare usernames.

/// Number of candidates produced for a name with fewer than two tokens.
pub const SEPARATOR_RULES: usize = 3;

/// Number of candidates produced for a name with two or more tokens.
pub const FULL_RULES: usize = 15;

/// Leading first-name characters kept by the truncated `last + first` rule.
const FIRST_NAME_PREFIX_LEN: usize = 4;

/// Expands display names into username candidates.
///
/// Candidates are emitted name by name, each name's candidates in fixed rule
/// order. A non-empty `domain` appends `<candidate>@<domain>` for every bare
/// candidate, in the same order, after the last bare candidate. Duplicates are
/// expected and left for [`crate::deduplicate`].
///
/// # Example
///
/// ```
/// use spraylist::generate;
///
/// let candidates = generate(&["Ada Lovelace"], Some("example.org"));
///
/// assert_eq!(candidates.len(), 30);
/// assert_eq!(candidates.first().map(String::as_str), Some("ada.lovelace"));
/// assert_eq!(
///     candidates.get(15).map(String::as_str),
///     Some("ada.lovelace@example.org")
/// );
/// ```
#[must_use]
pub fn generate<S: AsRef<str>>(names: &[S], domain: Option<&str>) -> Vec<String> {
    let mut candidates: Vec<String> = names
        .iter()
        .flat_map(|name| permutations(name.as_ref()))
        .collect();

    if let Some(email_domain) = domain.filter(|value| !value.is_empty()) {
        let emails: Vec<String> = candidates
            .iter()
            .map(|candidate| format!("{candidate}@{email_domain}"))
            .collect();
        candidates.extend(emails);
    }

    candidates
}

/// Returns the candidates for a single display name.
///
/// Yields [`FULL_RULES`] candidates when the lower-cased name splits into at
/// least two space-separated tokens and [`SEPARATOR_RULES`] otherwise.
///
/// # Example
///
/// ```
/// use spraylist::permutations;
///
/// assert_eq!(permutations("Cher"), vec!["cher", "cher", "cher"]);
/// assert_eq!(permutations("Ada Lovelace").len(), 15);
/// ```
#[must_use]
pub fn permutations(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    let mut candidates = Vec::with_capacity(FULL_RULES);
    candidates.push(lower.replace(' ', "."));
    candidates.push(lower.replace(' ', "-"));
    candidates.push(lower.replace(' ', ""));

    if let Some(parts) = NameParts::split(&lower) {
        candidates.extend(parts.combinations());
    }

    candidates
}

/// First and last tokens of a lower-cased name plus their derived pieces.
///
/// Tokens come from a literal split on `' '`, so repeated, leading, or
/// trailing spaces produce empty tokens. Initials of empty tokens are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NameParts<'a> {
    first: &'a str,
    last: &'a str,
    initial: String,
    last_initial: String,
    first_prefix: String,
}

impl<'a> NameParts<'a> {
    /// Returns `None` for names with fewer than two tokens.
    fn split(lower: &'a str) -> Option<Self> {
        let mut tokens = lower.split(' ');
        let first = tokens.next()?;
        let last = tokens.next_back()?;

        Some(Self {
            first,
            last,
            initial: first.chars().take(1).collect(),
            last_initial: last.chars().take(1).collect(),
            first_prefix: first.chars().take(FIRST_NAME_PREFIX_LEN).collect(),
        })
    }

    fn combinations(&self) -> [String; FULL_RULES - SEPARATOR_RULES] {
        let Self {
            first,
            last,
            initial,
            last_initial,
            first_prefix,
        } = self;

        [
            format!("{last}{first}"),
            format!("{first}{last}"),
            format!("{initial}{last}"),
            format!("{last}{initial}"),
            format!("{first}{last_initial}"),
            format!("{initial}.{last}"),
            format!("{last_initial}.{first}"),
            format!("{first}.{last_initial}"),
            format!("{initial}-{last}"),
            format!("{last}{first_prefix}"),
            (*first).to_owned(),
            (*last).to_owned(),
        ]
    }
}
