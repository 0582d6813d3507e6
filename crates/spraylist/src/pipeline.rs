//! Wires generation, deduplication, ranking, and reversal together.
//!
//! Options are validated once, when [`PipelineOptions`] is built. Running the
//! pipeline afterwards cannot fail.

use tracing::debug;

use crate::complexity::{DedupMode, deduplicate, rank};
use crate::error::ConfigError;
use crate::permutation::generate;

/// How candidates are ordered and deduplicated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RankingMode {
    /// Leave the list in its incoming order.
    #[default]
    None,
    /// Sort by complexity, keeping duplicates.
    SortOnly,
    /// Drop exact duplicates, then sort by complexity.
    SortDedupCaseSensitive,
    /// Drop duplicates ignoring ASCII case, then sort by complexity.
    SortDedupCaseInsensitive,
}

impl RankingMode {
    /// Resolves the mode from the three independent sort flags.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingModes`] when more than one flag is
    /// set.
    ///
    /// # Example
    ///
    /// ```
    /// use spraylist::{ConfigError, RankingMode};
    ///
    /// assert_eq!(RankingMode::from_flags(false, false, true), Ok(RankingMode::SortDedupCaseInsensitive));
    /// assert_eq!(RankingMode::from_flags(true, true, false), Err(ConfigError::ConflictingModes));
    /// ```
    pub const fn from_flags(
        sort: bool,
        dedup_case_sensitive: bool,
        dedup_case_insensitive: bool,
    ) -> Result<Self, ConfigError> {
        match (sort, dedup_case_sensitive, dedup_case_insensitive) {
            (false, false, false) => Ok(Self::None),
            (true, false, false) => Ok(Self::SortOnly),
            (false, true, false) => Ok(Self::SortDedupCaseSensitive),
            (false, false, true) => Ok(Self::SortDedupCaseInsensitive),
            _ => Err(ConfigError::ConflictingModes),
        }
    }

    /// Returns the dedup policy applied before sorting.
    #[must_use]
    pub const fn dedup_mode(self) -> DedupMode {
        match self {
            Self::None | Self::SortOnly => DedupMode::None,
            Self::SortDedupCaseSensitive => DedupMode::CaseSensitive,
            Self::SortDedupCaseInsensitive => DedupMode::CaseInsensitive,
        }
    }

    /// Returns `true` when the mode sorts by complexity.
    #[must_use]
    pub const fn sorts(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Settings for the generation step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    domain: Option<String>,
}

impl Generation {
    /// Creates generation settings; a blank domain counts as no domain.
    #[must_use]
    pub fn new(domain: Option<String>) -> Self {
        Self {
            domain: domain.filter(|value| !value.trim().is_empty()),
        }
    }

    /// Returns the email domain, if any.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}

/// Validated options for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    generation: Option<Generation>,
    ranking: RankingMode,
    reverse: bool,
}

impl PipelineOptions {
    /// Builds options, rejecting runs that would do nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NothingRequested`] when `generation` is `None`
    /// and `ranking` is [`RankingMode::None`].
    ///
    /// # Example
    ///
    /// ```
    /// use spraylist::{ConfigError, Generation, PipelineOptions, RankingMode};
    ///
    /// let options = PipelineOptions::new(Some(Generation::new(None)), RankingMode::None, false);
    /// assert!(options.is_ok());
    ///
    /// let idle = PipelineOptions::new(None, RankingMode::None, true);
    /// assert_eq!(idle, Err(ConfigError::NothingRequested));
    /// ```
    pub fn new(
        generation: Option<Generation>,
        ranking: RankingMode,
        reverse: bool,
    ) -> Result<Self, ConfigError> {
        if generation.is_none() && !ranking.sorts() {
            return Err(ConfigError::NothingRequested);
        }
        Ok(Self {
            generation,
            ranking,
            reverse,
        })
    }

    /// Returns the generation settings when generation was requested.
    #[must_use]
    pub const fn generation(&self) -> Option<&Generation> {
        self.generation.as_ref()
    }

    /// Returns the ranking mode.
    #[must_use]
    pub const fn ranking(&self) -> RankingMode {
        self.ranking
    }

    /// Returns `true` when the final order is reversed.
    #[must_use]
    pub const fn reverse(&self) -> bool {
        self.reverse
    }
}

/// Runs generation, dedup, ranking, and reversal over input lines.
///
/// With [`RankingMode::None`] the (possibly generated) list passes through in
/// its original order before the optional reversal.
///
/// # Example
///
/// ```
/// use spraylist::{Generation, PipelineOptions, RankingMode, process};
///
/// let options = PipelineOptions::new(
///     Some(Generation::new(None)),
///     RankingMode::SortDedupCaseSensitive,
///     false,
/// )
/// .expect("valid options");
///
/// let ranked = process(vec!["John Doe".to_owned()], &options);
///
/// assert_eq!(ranked.len(), 13);
/// assert_eq!(ranked.first().map(String::as_str), Some("doe"));
/// ```
#[must_use]
pub fn process(lines: Vec<String>, options: &PipelineOptions) -> Vec<String> {
    let candidates = match options.generation() {
        Some(generation) => {
            let generated = generate(&lines, generation.domain());
            debug!(
                names = lines.len(),
                candidates = generated.len(),
                domain = generation.domain().unwrap_or_default(),
                "generated username candidates"
            );
            generated
        }
        None => lines,
    };

    let mut ordered = if options.ranking().sorts() {
        let before = candidates.len();
        let unique = deduplicate(candidates, options.ranking().dedup_mode());
        debug!(
            mode = ?options.ranking(),
            removed = before.saturating_sub(unique.len()),
            "deduplicated candidates"
        );
        rank(unique)
    } else {
        candidates
    };

    if options.reverse() {
        ordered.reverse();
    }

    ordered
}
