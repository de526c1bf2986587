// src/hierarchy.rs
//! Reconstructs who-reports-to-whom from manager references.
//!
//! Linking is lenient: an employee whose manager is not in the directory is
//! left unlinked and reported in [`HierarchySummary::unresolved`]. Whether that
//! is fatal is decided by the caller (see `Engine`).

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{Directory, EmployeeId};

/// What a build pass linked and what it could not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HierarchySummary {
    /// Employees without a manager reference.
    pub roots: Vec<EmployeeId>,
    /// Number of employee → manager links made.
    pub linked: usize,
    /// `(employee, missing manager)` pairs left unlinked.
    pub unresolved: Vec<(EmployeeId, EmployeeId)>,
}

impl HierarchySummary {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Populates every subordinate list in `directory` from scratch.
///
/// Runs in two passes: links are collected from a read-only walk, then
/// applied. Calling it again on the same directory gives the same lists.
pub fn build(directory: &mut Directory) -> HierarchySummary {
    for employee in directory.all_employees_mut() {
        employee.subordinates.clear();
    }

    let mut summary = HierarchySummary::default();
    let mut links: Vec<(EmployeeId, EmployeeId)> = Vec::new();

    for employee in directory.all_employees() {
        match employee.manager_id {
            None => summary.roots.push(employee.id()),
            Some(manager) if directory.contains(manager) => {
                links.push((manager, employee.id()));
            }
            Some(manager) => {
                warn!(
                    employee = employee.id(),
                    manager, "manager not in directory, employee left unlinked"
                );
                summary.unresolved.push((employee.id(), manager));
            }
        }
    }

    for (manager, subordinate) in links {
        if let Some(m) = directory.get_mut(manager) {
            m.subordinates.push(subordinate);
            summary.linked += 1;
        }
    }

    debug!(
        roots = summary.roots.len(),
        linked = summary.linked,
        unresolved = summary.unresolved.len(),
        "hierarchy built"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Employee;
    use rust_decimal::Decimal;

    fn emp(id: EmployeeId, manager: Option<EmployeeId>) -> Employee {
        Employee::new(id, "E", id.to_string(), Decimal::new(1000, 0), manager)
    }

    #[test]
    fn links_direct_reports_only() {
        let mut d: Directory = [emp(1, None), emp(2, Some(1)), emp(3, Some(1)), emp(4, Some(2))]
            .into_iter()
            .collect();
        let summary = build(&mut d);

        assert_eq!(summary.roots, vec![1]);
        assert_eq!(summary.linked, 3);
        assert!(summary.is_complete());
        assert_eq!(d.get(1).unwrap().subordinates(), &[2, 3]);
        assert_eq!(d.get(2).unwrap().subordinates(), &[4]);
        assert!(d.get(4).unwrap().subordinates().is_empty());
    }

    #[test]
    fn unresolved_manager_is_skipped_not_fatal() {
        let mut d: Directory = [emp(1, None), emp(2, Some(99))].into_iter().collect();
        let summary = build(&mut d);

        assert_eq!(summary.unresolved, vec![(2, 99)]);
        assert_eq!(summary.linked, 0);
        assert!(d.get(1).unwrap().subordinates().is_empty());
    }

    #[test]
    fn rebuilding_does_not_duplicate_links() {
        let mut d: Directory = [emp(1, None), emp(2, Some(1))].into_iter().collect();
        let first = build(&mut d);
        let second = build(&mut d);

        assert_eq!(first, second);
        assert_eq!(d.get(1).unwrap().subordinates(), &[2]);
    }
}
