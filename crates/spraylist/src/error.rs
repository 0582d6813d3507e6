//! Error types for the spraylist crate.
//!
//! The permutation and ranking engines are infallible. Errors only arise at
//! the boundary, when caller-supplied options are validated before the
//! pipeline runs.

use thiserror::Error;

/// Invalid combinations of pipeline options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// More than one ranking mode was requested at once.
    #[error("only one ranking mode may be selected at a time (sort, sort-dup-sen, or sort-dup-ins)")]
    ConflictingModes,

    /// Neither generation nor ranking was requested.
    #[error("nothing to do: request generation, a ranking mode, or both")]
    NothingRequested,
}
