//! Main execution logic for the `orgcheck` analysis engine.
//! Unified entry point: ingest, build the hierarchy, run both analyzers.

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::config::{Config, UnresolvedManagerPolicy};
use crate::domain::Directory;
use crate::error::{OrgError, Result};
use crate::hierarchy;
use crate::ingest;
use crate::types::AnalysisReport;

use super::depth::DepthAnalyzer;
use super::salary::SalaryBandAnalyzer;

/// The main analysis engine.
pub struct Engine {
    config: Config,
}

impl Engine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads `source` and analyzes it.
    ///
    /// # Errors
    /// Propagates ingest, duplicate-id and structural-integrity errors.
    pub fn run_source(&self, source: &Path) -> Result<AnalysisReport> {
        if source.as_os_str().is_empty() {
            return Err(OrgError::MissingSource);
        }
        let rows = ingest::read_employees(source)?;
        let mut directory = Directory::from_rows(rows, self.config.policy.duplicate_ids)?;
        self.run(&mut directory)
    }

    /// Rebuilds the hierarchy of `directory`, then runs the reporting-line and
    /// salary-band analyses over it.
    ///
    /// Repeated runs over an unchanged directory produce the same findings.
    ///
    /// # Errors
    /// Returns [`OrgError::ManagerNotFound`] for an unresolved manager (before
    /// any analysis under the fatal policy, from the depth walk otherwise),
    /// [`OrgError::ReportingCycle`] for a loop, and
    /// [`OrgError::SalaryOverflow`] if averaging overflows.
    pub fn run(&self, directory: &mut Directory) -> Result<AnalysisReport> {
        let start = Instant::now();

        // Pass 1: link subordinates.
        let summary = hierarchy::build(directory);
        if self.config.policy.unresolved_manager == UnresolvedManagerPolicy::Fatal {
            if let Some(&(employee, manager)) = summary.unresolved.first() {
                return Err(OrgError::ManagerNotFound { employee, manager });
            }
        }

        let mut report = AnalysisReport {
            employees: directory.len(),
            hierarchy: summary,
            ..AnalysisReport::default()
        };

        // Pass 2: analyses. Only the depth analyzer writes to the directory.
        DepthAnalyzer::new(self.config.rules.max_reporting_depth).analyze(directory, &mut report)?;
        SalaryBandAnalyzer::new(
            self.config.rules.min_salary_ratio,
            self.config.rules.max_salary_ratio,
        )
        .analyze(directory, &mut report)?;

        report.duration_ms = start.elapsed().as_millis();
        debug!(
            employees = report.employees,
            findings = report.findings.len(),
            "analysis complete"
        );
        Ok(report)
    }
}
