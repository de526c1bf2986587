// src/cli/handlers.rs
//! Core analysis command handler.

use crate::analysis::Engine;
use crate::cli::args::Cli;
use crate::config::Config;
use crate::error::OrgError;
use crate::exit::OrgCheckExit;
use crate::reporting;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Validates the data source before anything else is touched.
///
/// # Errors
/// Returns [`OrgError::MissingSource`] for an absent or blank path.
pub fn resolve_source(source: Option<&Path>) -> Result<PathBuf, OrgError> {
    match source {
        Some(p) if !p.to_string_lossy().trim().is_empty() => Ok(p.to_path_buf()),
        _ => Err(OrgError::MissingSource),
    }
}

/// Loads the explicit settings file, or `orgcheck.toml` when present.
///
/// # Errors
/// Returns [`OrgError::Config`] if the file is unreadable or invalid.
pub fn load_config(path: Option<&Path>, verbose: bool) -> Result<Config, OrgError> {
    let mut config = match path {
        Some(p) => Config::from_path(p)?,
        None => Config::load()?,
    };
    config.verbose = verbose;
    Ok(config)
}

/// Runs the full pipeline and prints the report.
///
/// # Errors
/// Returns error if the source is missing, the settings or data cannot be
/// read, or the hierarchy is broken.
pub fn handle_analyze(cli: &Cli) -> Result<OrgCheckExit> {
    let source = resolve_source(cli.source.as_deref())?;
    let config = load_config(cli.config.as_deref(), cli.verbose)?;

    let report = Engine::new(config).run_source(&source)?;

    if cli.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report)?;
    }

    Ok(if cli.fail_on_findings && report.has_findings() {
        OrgCheckExit::FindingsReported
    } else {
        OrgCheckExit::Success
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_source_is_missing() {
        assert!(matches!(resolve_source(None), Err(OrgError::MissingSource)));
        assert!(matches!(
            resolve_source(Some(Path::new("   "))),
            Err(OrgError::MissingSource)
        ));
        assert_eq!(
            resolve_source(Some(Path::new("data.csv"))).unwrap(),
            PathBuf::from("data.csv")
        );
    }
}
