// src/exit.rs
//! Standardized process exit codes for `orgcheck`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum OrgCheckExit {
    /// Analysis completed.
    Success = 0,
    /// Generic error (I/O, unreadable or unparsable data, duplicate ids).
    Error = 1,
    /// Missing data source or invalid configuration.
    InvalidInput = 2,
    /// Broken hierarchy: unresolved manager or reporting cycle.
    IntegrityFailure = 3,
    /// Findings were reported and the caller asked to fail on them.
    FindingsReported = 4,
}

impl OrgCheckExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for OrgCheckExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
