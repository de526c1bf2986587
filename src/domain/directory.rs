// src/domain/directory.rs
//! The id → employee mapping that owns every record of an analysis session.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::employee::{Employee, EmployeeId};
use crate::error::{OrgError, Result};
use crate::ingest::RawEmployee;

/// What to do when two input rows share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail the run with [`OrgError::DuplicateEmployee`].
    #[default]
    Reject,
    /// Keep the row that appears last.
    LastWins,
}

/// All employees keyed by id. Iterates in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    employees: BTreeMap<EmployeeId, Employee>,
}

impl Directory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from ingested rows, in the order supplied.
    ///
    /// # Errors
    /// Returns [`OrgError::DuplicateEmployee`] under [`DuplicatePolicy::Reject`]
    /// when an id appears twice.
    pub fn from_rows<I>(rows: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = RawEmployee>,
    {
        let mut directory = Self::new();
        for row in rows {
            let employee = row.into_employee();
            let id = employee.id();
            match policy {
                DuplicatePolicy::Reject => directory.insert_unique(employee)?,
                DuplicatePolicy::LastWins => {
                    if directory.put(employee).is_some() {
                        warn!(id, "duplicate employee id, keeping the last row");
                    }
                }
            }
        }
        debug!(employees = directory.len(), "directory populated");
        Ok(directory)
    }

    /// Inserts or overwrites by id, returning the displaced record.
    pub fn put(&mut self, employee: Employee) -> Option<Employee> {
        self.employees.insert(employee.id(), employee)
    }

    /// Inserts a record whose id must not be present yet.
    ///
    /// # Errors
    /// Returns [`OrgError::DuplicateEmployee`] if the id is taken.
    pub fn insert_unique(&mut self, employee: Employee) -> Result<()> {
        match self.employees.entry(employee.id()) {
            btree_map::Entry::Occupied(slot) => {
                Err(OrgError::DuplicateEmployee { id: *slot.key() })
            }
            btree_map::Entry::Vacant(slot) => {
                slot.insert(employee);
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    pub fn get_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.get_mut(&id)
    }

    /// Removes a record. Subordinate lists that name it are left as they are
    /// until the next hierarchy build.
    pub fn remove(&mut self, id: EmployeeId) -> Option<Employee> {
        self.employees.remove(&id)
    }

    #[must_use]
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.employees.contains_key(&id)
    }

    pub fn all_employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    pub(crate) fn all_employees_mut(&mut self) -> impl Iterator<Item = &mut Employee> {
        self.employees.values_mut()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<EmployeeId> {
        self.employees.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl FromIterator<Employee> for Directory {
    /// Last write wins, like [`Directory::put`].
    fn from_iter<T: IntoIterator<Item = Employee>>(iter: T) -> Self {
        let mut directory = Self::new();
        for employee in iter {
            directory.put(employee);
        }
        directory
    }
}
