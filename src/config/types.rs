use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::DuplicatePolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Longest allowed chain of managers above an employee.
    #[serde(default = "default_max_depth")]
    pub max_reporting_depth: usize,
    /// Lower salary band, as a multiple of the direct reports' average.
    #[serde(default = "default_min_ratio")]
    pub min_salary_ratio: Decimal,
    /// Upper salary band, as a multiple of the direct reports' average.
    #[serde(default = "default_max_ratio")]
    pub max_salary_ratio: Decimal,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_reporting_depth: default_max_depth(),
            min_salary_ratio: default_min_ratio(),
            max_salary_ratio: default_max_ratio(),
        }
    }
}

const fn default_max_depth() -> usize { 4 }
fn default_min_ratio() -> Decimal { Decimal::new(12, 1) }
fn default_max_ratio() -> Decimal { Decimal::new(15, 1) }

/// How to treat a manager reference that does not resolve while linking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedManagerPolicy {
    /// Fail the run before any analysis.
    #[default]
    Fatal,
    /// Leave the employee unlinked; the depth walk still fails on it.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub duplicate_ids: DuplicatePolicy,
    #[serde(default)]
    pub unresolved_manager: UnresolvedManagerPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrgCheckToml {
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rules: RuleConfig,
    pub policy: PolicyConfig,
    /// File the settings came from, if any.
    pub origin: Option<PathBuf>,
    pub verbose: bool,
}
