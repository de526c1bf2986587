// src/domain/employee.rs
use rust_decimal::Decimal;
use serde::Serialize;

pub type EmployeeId = i64;

/// One employee plus the hierarchy fields derived from the whole directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: Decimal,
    pub manager_id: Option<EmployeeId>,
    /// Direct reports, by id. Rebuilt by the hierarchy builder.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) subordinates: Vec<EmployeeId>,
    /// Manager hops to the top of the chain. Written by the depth analyzer only.
    pub(crate) reporting_line_length: usize,
}

impl Employee {
    #[must_use]
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: Decimal,
        manager_id: Option<EmployeeId>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            manager_id,
            subordinates: Vec::new(),
            reporting_line_length: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// First and last name joined by a space.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn is_top_of_hierarchy(&self) -> bool {
        self.manager_id.is_none()
    }

    #[must_use]
    pub fn subordinates(&self) -> &[EmployeeId] {
        &self.subordinates
    }

    #[must_use]
    pub fn has_subordinates(&self) -> bool {
        !self.subordinates.is_empty()
    }

    #[must_use]
    pub fn reporting_line_length(&self) -> usize {
        self.reporting_line_length
    }
}
