// tests/unit_config.rs
use orgcheck_core::config::{Config, RuleConfig, UnresolvedManagerPolicy};
use orgcheck_core::domain::DuplicatePolicy;
use orgcheck_core::error::OrgError;
use rust_decimal::Decimal;
use std::fs;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("orgcheck.toml");
    fs::write(&path, "[rules]\nmax_reporting_depth = 6").unwrap();
    let c = Config::from_path(&path).unwrap();
    assert_eq!(c.rules.max_reporting_depth, 6);
    assert_eq!(c.rules.min_salary_ratio, Decimal::new(12, 1));
    assert_eq!(c.origin.as_deref(), Some(path.as_path()));
}

#[test]
fn test_defaults() {
    let r = RuleConfig::default();
    assert_eq!(r.max_reporting_depth, 4);
    assert_eq!(r.min_salary_ratio, Decimal::new(12, 1));
    assert_eq!(r.max_salary_ratio, Decimal::new(15, 1));
}

#[test]
fn test_empty_file_keeps_defaults() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("orgcheck.toml");
    fs::write(&path, "").unwrap();
    let c = Config::from_path(&path).unwrap();
    assert_eq!(c.rules, RuleConfig::default());
    assert_eq!(c.policy.duplicate_ids, DuplicatePolicy::Reject);
}

#[test]
fn test_policy_section() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("orgcheck.toml");
    fs::write(
        &path,
        "[policy]\nduplicate_ids = \"last-wins\"\nunresolved_manager = \"lenient\"",
    )
    .unwrap();
    let c = Config::from_path(&path).unwrap();
    assert_eq!(c.policy.duplicate_ids, DuplicatePolicy::LastWins);
    assert_eq!(c.policy.unresolved_manager, UnresolvedManagerPolicy::Lenient);
}

#[test]
fn test_missing_file_is_config_error() {
    let d = tempfile::tempdir().unwrap();
    let err = Config::from_path(&d.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, OrgError::Config { .. }));
}

#[test]
fn test_malformed_toml_names_the_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("orgcheck.toml");
    fs::write(&path, "[rules\nmax_reporting_depth = ").unwrap();
    let err = Config::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("orgcheck.toml"));
}

#[test]
fn test_zero_ratio_rejected() {
    let mut c = Config::new();
    assert!(c.parse_toml("[rules]\nmin_salary_ratio = \"0\"").is_err());
}
