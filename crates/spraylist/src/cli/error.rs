//! Error types for the spraylist CLI.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::error::ConfigError;

/// Errors surfaced by the CLI: invalid options and I/O around the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The requested flags do not form a valid pipeline.
    #[error("invalid options: {source}")]
    Config {
        /// Underlying validation error.
        #[from]
        #[source]
        source: ConfigError,
    },
    /// The input file could not be read.
    #[error("failed to read input file at '{path}': {message}")]
    Input {
        /// Path to the input file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// The output file could not be written.
    #[error("failed to write output file at '{path}': {message}")]
    Output {
        /// Path to the output file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// The wordlist could not be written to stdout.
    #[error("failed to write to stdout: {message}")]
    Stdout {
        /// Description of the I/O error.
        message: String,
    },
    /// Settings could not be loaded from the environment or config files.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Loader error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_formats_with_source() {
        let err = CliError::from(ConfigError::NothingRequested);
        assert_eq!(
            err.to_string(),
            "invalid options: nothing to do: request generation, a ranking mode, or both"
        );
    }

    #[test]
    fn input_error_formats_correctly() {
        let err = CliError::Input {
            path: Utf8PathBuf::from("names.txt"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read input file at 'names.txt': file not found"
        );
    }

    #[test]
    fn output_error_formats_correctly() {
        let err = CliError::Output {
            path: Utf8PathBuf::from("/tmp/out.txt"),
            message: "permission denied".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write output file at '/tmp/out.txt': permission denied"
        );
    }
}
