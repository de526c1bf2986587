// src/analysis/depth.rs
//! Reporting-line depth: how many managers sit above each employee.

use tracing::debug;

use super::sink::FindingSink;
use crate::domain::{Directory, Employee, EmployeeId};
use crate::error::{OrgError, Result};
use crate::types::Finding;

/// Flags employees with more than `max_depth` managers above them.
#[derive(Debug, Clone, Copy)]
pub struct DepthAnalyzer {
    max_depth: usize,
}

impl DepthAnalyzer {
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Computes and stores every employee's reporting-line length, then emits
    /// a finding for each one above the limit.
    ///
    /// Nothing is stored or emitted unless every chain resolves.
    ///
    /// # Errors
    /// Returns [`OrgError::ManagerNotFound`] or [`OrgError::ReportingCycle`]
    /// for the first broken chain, naming the employee it started from.
    pub fn analyze<S>(&self, directory: &mut Directory, sink: &mut S) -> Result<()>
    where
        S: FindingSink + ?Sized,
    {
        let view: &Directory = directory;
        let depths = view
            .all_employees()
            .map(|e| Ok((e.id(), reporting_length(view, e)?)))
            .collect::<Result<Vec<(EmployeeId, usize)>>>()?;

        for &(id, depth) in &depths {
            if let Some(employee) = directory.get_mut(id) {
                employee.reporting_line_length = depth;
            }
        }

        let mut flagged = 0usize;
        for (id, depth) in depths {
            if depth <= self.max_depth {
                continue;
            }
            if let Some(employee) = directory.get(id) {
                sink.emit(Finding::reporting_line(
                    id,
                    employee.display_name(),
                    depth - self.max_depth,
                ));
                flagged += 1;
            }
        }

        debug!(flagged, max_depth = self.max_depth, "reporting-line analysis done");
        Ok(())
    }
}

impl Default for DepthAnalyzer {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Counts manager hops from `employee` to the top of its chain.
///
/// A chain can never be longer than the directory, so exceeding that bound
/// means the chain loops.
///
/// # Errors
/// Returns [`OrgError::ManagerNotFound`] if a hop does not resolve and
/// [`OrgError::ReportingCycle`] if the chain loops.
pub fn reporting_length(directory: &Directory, employee: &Employee) -> Result<usize> {
    let bound = directory.len();
    let mut length = 0usize;
    let mut current = employee.manager_id;

    while let Some(manager_id) = current {
        length += 1;
        if length > bound {
            return Err(OrgError::ReportingCycle {
                employee: employee.id(),
            });
        }
        let manager = directory
            .get(manager_id)
            .ok_or(OrgError::ManagerNotFound {
                employee: employee.id(),
                manager: manager_id,
            })?;
        current = manager.manager_id;
    }

    Ok(length)
}
