// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::EmployeeId;
use crate::exit::OrgCheckExit;

#[derive(Debug, Error)]
pub enum OrgError {
    #[error("No data source given: pass the path to an employee CSV file")]
    MissingSource,

    #[error("Invalid configuration ({path}): {message}")]
    Config { path: PathBuf, message: String },

    #[error("Failed to read employee data from {path}{}: {source}", record_suffix(.record))]
    Ingest {
        path: PathBuf,
        record: Option<u64>,
        source: csv::Error,
    },

    #[error("Employee data in {path} has no {column:?} column")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid employee record in {path} (record {record}): {message}")]
    InvalidRecord {
        path: PathBuf,
        record: u64,
        message: String,
    },

    #[error("Duplicate employee id {id}")]
    DuplicateEmployee { id: EmployeeId },

    #[error("Manager {manager} not found for employee: {employee}")]
    ManagerNotFound {
        employee: EmployeeId,
        manager: EmployeeId,
    },

    #[error("Reporting line of employee {employee} loops back on itself")]
    ReportingCycle { employee: EmployeeId },

    #[error("Salary arithmetic overflowed while averaging the reports of employee {employee}")]
    SalaryOverflow { employee: EmployeeId },
}

pub type Result<T> = std::result::Result<T, OrgError>;

impl OrgError {
    /// Whether this error means the hierarchy itself is broken.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::ManagerNotFound { .. } | Self::ReportingCycle { .. }
        )
    }

    #[must_use]
    pub fn exit_code(&self) -> OrgCheckExit {
        match self {
            Self::MissingSource | Self::Config { .. } => OrgCheckExit::InvalidInput,
            Self::ManagerNotFound { .. } | Self::ReportingCycle { .. } => {
                OrgCheckExit::IntegrityFailure
            }
            Self::Ingest { .. }
            | Self::MissingColumn { .. }
            | Self::InvalidRecord { .. }
            | Self::DuplicateEmployee { .. }
            | Self::SalaryOverflow { .. } => OrgCheckExit::Error,
        }
    }
}

fn record_suffix(record: &Option<u64>) -> String {
    record.map_or_else(String::new, |r| format!(" (record {r})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_errors_map_to_integrity_exit() {
        let err = OrgError::ReportingCycle { employee: 7 };
        assert!(err.is_structural());
        assert_eq!(err.exit_code(), OrgCheckExit::IntegrityFailure);
    }

    #[test]
    fn manager_not_found_names_the_originating_employee() {
        let err = OrgError::ManagerNotFound {
            employee: 5,
            manager: 42,
        };
        assert_eq!(err.to_string(), "Manager 42 not found for employee: 5");
    }

    #[test]
    fn missing_source_is_invalid_input() {
        assert_eq!(
            OrgError::MissingSource.exit_code(),
            OrgCheckExit::InvalidInput
        );
        assert!(!OrgError::MissingSource.is_structural());
    }
}
