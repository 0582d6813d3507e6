//! Username permutation and complexity ranking for user-spraying wordlists.
//!
//! The crate turns a list of display names into username and email
//! candidates, then orders candidates (or any raw strings) by a heuristic
//! complexity score, optionally dropping duplicates first.
//!
//! # Overview
//!
//! - [`generate`] expands names into candidates in a fixed rule order
//! - [`score`] computes the complexity heuristic for a single string
//! - [`deduplicate`] and [`rank`] remove repeats and sort by score
//! - [`process`] runs the whole pipeline from validated [`PipelineOptions`]
//! - [`cli`] holds the command-line surface used by the `spraylist` binary
//!
//! The score is a ranking aid, not a measure of password or username
//! strength.
//!
//! # Example
//!
//! ```
//! use spraylist::{Generation, PipelineOptions, RankingMode, process};
//!
//! let options = PipelineOptions::new(
//!     Some(Generation::new(Some("corp.example".to_owned()))),
//!     RankingMode::SortDedupCaseInsensitive,
//!     true,
//! )
//! .expect("valid options");
//!
//! let wordlist = process(vec!["Grace Hopper".to_owned()], &options);
//!
//! assert_eq!(wordlist.len(), 28);
//! assert!(wordlist.iter().any(|entry| entry == "ghopper@corp.example"));
//! ```

mod atomic_io;
pub mod cli;
mod complexity;
mod error;
mod permutation;
mod pipeline;
mod settings;

pub use complexity::{ComplexityBreakdown, DedupMode, deduplicate, rank, score};
pub use error::ConfigError;
pub use permutation::{FULL_RULES, SEPARATOR_RULES, generate, permutations};
pub use pipeline::{Generation, PipelineOptions, RankingMode, process};
pub use settings::SprayListSettings;
