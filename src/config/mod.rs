// src/config/mod.rs
pub mod types;

pub use self::types::{Config, OrgCheckToml, PolicyConfig, RuleConfig, UnresolvedManagerPolicy};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{OrgError, Result};

/// Looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "orgcheck.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `orgcheck.toml` from the working directory, or built-in defaults
    /// when the file does not exist.
    ///
    /// # Errors
    /// Returns [`OrgError::Config`] if the file exists but is invalid.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Loads settings from an explicit file.
    ///
    /// # Errors
    /// Returns [`OrgError::Config`] if the file cannot be read, parsed or validated.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| config_error(path, e.to_string()))?;
        let mut config = Self::new();
        config.origin = Some(path.to_path_buf());
        config.parse_toml(&content)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Replaces rules and policy with the contents of a TOML document.
    ///
    /// # Errors
    /// Returns [`OrgError::Config`] on malformed TOML or invalid values.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let parsed: OrgCheckToml =
            toml::from_str(content).map_err(|e| config_error(&self.origin_path(), e.to_string()))?;
        self.rules = parsed.rules;
        self.policy = parsed.policy;
        self.validate()
    }

    /// Checks the salary band is a non-empty, positive interval.
    ///
    /// # Errors
    /// Returns [`OrgError::Config`] describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        let RuleConfig {
            min_salary_ratio: min,
            max_salary_ratio: max,
            ..
        } = self.rules;
        if min.is_sign_negative() || min.is_zero() {
            return Err(config_error(
                &self.origin_path(),
                format!("min_salary_ratio must be positive, got {min}"),
            ));
        }
        if min > max {
            return Err(config_error(
                &self.origin_path(),
                format!("min_salary_ratio ({min}) exceeds max_salary_ratio ({max})"),
            ));
        }
        Ok(())
    }

    fn origin_path(&self) -> PathBuf {
        self.origin
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }
}

fn config_error(path: &Path, message: String) -> OrgError {
    OrgError::Config {
        path: path.to_path_buf(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DuplicatePolicy;
    use rust_decimal::Decimal;

    #[test]
    fn defaults_match_the_documented_rules() {
        let c = Config::new();
        assert_eq!(c.rules.max_reporting_depth, 4);
        assert_eq!(c.rules.min_salary_ratio, Decimal::new(12, 1));
        assert_eq!(c.rules.max_salary_ratio, Decimal::new(15, 1));
        assert_eq!(c.policy.duplicate_ids, DuplicatePolicy::Reject);
        assert_eq!(c.policy.unresolved_manager, UnresolvedManagerPolicy::Fatal);
    }

    #[test]
    fn ratios_accept_strings_and_floats() {
        let mut c = Config::new();
        c.parse_toml("[rules]\nmin_salary_ratio = \"1.1\"\nmax_salary_ratio = 1.75\n")
            .unwrap();
        assert_eq!(c.rules.min_salary_ratio, Decimal::new(11, 1));
        assert_eq!(c.rules.max_salary_ratio, Decimal::new(175, 2));
        assert_eq!(c.rules.max_reporting_depth, 4);
    }

    #[test]
    fn policies_use_kebab_case() {
        let mut c = Config::new();
        c.parse_toml("[policy]\nduplicate_ids = \"last-wins\"\nunresolved_manager = \"lenient\"\n")
            .unwrap();
        assert_eq!(c.policy.duplicate_ids, DuplicatePolicy::LastWins);
        assert_eq!(c.policy.unresolved_manager, UnresolvedManagerPolicy::Lenient);
    }

    #[test]
    fn inverted_band_is_rejected() {
        let mut c = Config::new();
        let err = c
            .parse_toml("[rules]\nmin_salary_ratio = \"2\"\nmax_salary_ratio = \"1.5\"\n")
            .unwrap_err();
        assert!(matches!(err, OrgError::Config { .. }));
    }

    #[test]
    fn unknown_policy_value_is_rejected() {
        let mut c = Config::new();
        assert!(c.parse_toml("[policy]\nduplicate_ids = \"merge\"\n").is_err());
    }
}
