//! Defaults loaded via OrthoConfig.
//!
//! Settings come from `SPRAYLIST_*` environment variables and any
//! configuration file OrthoConfig discovers. Command-line flags parsed by
//! [`crate::cli::Cli`] take precedence over these values.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::cli::CliError;

const PROGRAM_NAME: &str = "spraylist";

/// Configuration values for the spraylist binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SPRAYLIST")]
pub struct SprayListSettings {
    /// Default email domain used when `--generate` runs without `--domain`.
    pub domain: Option<String>,
    /// Emit log events as JSON lines on stderr.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl SprayListSettings {
    /// Loads settings from the environment and configuration files only.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Settings`] when a source holds invalid values.
    pub fn from_environment() -> Result<Self, CliError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| CliError::Settings {
            message: err.to_string(),
        })
    }

    /// Returns the configured default domain, ignoring blank values.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings loading.

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SPRAYLIST_DOMAIN", None::<String>),
            ("SPRAYLIST_JSON_LOGS", None::<String>),
        ]);

        let settings = SprayListSettings::from_environment().expect("settings should load");
        assert_eq!(settings.domain(), None);
        assert!(!settings.json_logs);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SPRAYLIST_DOMAIN", Some("corp.example".to_owned())),
            ("SPRAYLIST_JSON_LOGS", Some("true".to_owned())),
        ]);

        let settings = SprayListSettings::from_environment().expect("settings should load");
        assert_eq!(settings.domain(), Some("corp.example"));
        assert!(settings.json_logs);
    }

    #[test]
    fn blank_domain_counts_as_missing() {
        let settings = SprayListSettings {
            domain: Some("   ".to_owned()),
            json_logs: false,
        };

        assert_eq!(settings.domain(), None);
    }
}
