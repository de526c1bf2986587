use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::EmployeeId;
use crate::hierarchy::HierarchySummary;

/// What kind of anomaly a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    /// More managers above the employee than allowed.
    ReportingLineTooLong,
    /// Manager earns less than the lower salary band.
    Underpaid,
    /// Manager earns more than the upper salary band.
    Overpaid,
}

impl FindingKind {
    /// Stable identifier used in machine-readable output.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::ReportingLineTooLong => "reporting-line-too-long",
            Self::Underpaid => "underpaid",
            Self::Overpaid => "overpaid",
        }
    }

    #[must_use]
    pub fn is_salary(self) -> bool {
        matches!(self, Self::Underpaid | Self::Overpaid)
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A single anomaly detected during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub employee_id: EmployeeId,
    /// Display name of the subject employee.
    pub name: String,
    pub kind: FindingKind,
    /// Excess hops for reporting lines, currency amount for salary findings.
    #[serde(with = "rust_decimal::serde::str")]
    pub magnitude: Decimal,
}

impl Finding {
    #[must_use]
    pub fn reporting_line(employee_id: EmployeeId, name: String, excess: usize) -> Self {
        Self {
            employee_id,
            name,
            kind: FindingKind::ReportingLineTooLong,
            magnitude: Decimal::from(excess),
        }
    }

    #[must_use]
    pub fn salary(employee_id: EmployeeId, name: String, kind: FindingKind, amount: Decimal) -> Self {
        debug_assert!(kind.is_salary());
        Self {
            employee_id,
            name,
            kind,
            magnitude: amount,
        }
    }
}

/// Results of one full analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub employees: usize,
    pub hierarchy: HierarchySummary,
    pub findings: Vec<Finding>,
    pub duration_ms: u128,
}

impl AnalysisReport {
    #[must_use]
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    #[must_use]
    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings.iter().filter(|f| f.kind == kind).count()
    }

    pub fn of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    /// Count of reporting-line findings.
    #[must_use]
    pub fn reporting_line_count(&self) -> usize {
        self.count(FindingKind::ReportingLineTooLong)
    }

    /// Count of underpaid and overpaid findings together.
    #[must_use]
    pub fn salary_count(&self) -> usize {
        self.findings.iter().filter(|f| f.kind.is_salary()).count()
    }
}
