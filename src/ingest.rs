// src/ingest.rs
//! CSV ingest: turns an employee export into raw rows, in file order.
//!
//! Headers are matched case-insensitively and may appear in any order
//! (`id`, `firstName`, `lastName`, `salary`, `managerId`). Salaries are parsed
//! from their text, never through a float.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Employee, EmployeeId};
use crate::error::{OrgError, Result};

const REQUIRED_COLUMNS: [&str; 4] = ["id", "firstname", "lastname", "salary"];

/// One employee row as supplied by the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEmployee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: Decimal,
    pub manager_id: Option<EmployeeId>,
}

impl RawEmployee {
    #[must_use]
    pub fn into_employee(self) -> Employee {
        Employee::new(
            self.id,
            self.first_name,
            self.last_name,
            self.salary,
            self.manager_id,
        )
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: EmployeeId,
    #[serde(rename = "firstname")]
    first_name: String,
    #[serde(rename = "lastname")]
    last_name: String,
    salary: String,
    #[serde(rename = "managerid", default)]
    manager_id: Option<EmployeeId>,
}

/// Reads every employee row from a CSV file.
///
/// # Errors
/// Returns [`OrgError::Ingest`] if the file cannot be opened or a row cannot be
/// parsed, [`OrgError::MissingColumn`] if a required header is absent, and
/// [`OrgError::InvalidRecord`] for an unparsable or negative salary.
pub fn read_employees(path: &Path) -> Result<Vec<RawEmployee>> {
    let file = File::open(path).map_err(|e| OrgError::Ingest {
        path: path.to_path_buf(),
        record: None,
        source: e.into(),
    })?;
    read_employees_from(file, path)
}

/// Reads employee rows from any reader. `origin` is only used in errors.
///
/// # Errors
/// Same as [`read_employees`].
pub fn read_employees_from<R: Read>(input: R, origin: &Path) -> Result<Vec<RawEmployee>> {
    let ingest_err = |record: Option<u64>, source: csv::Error| OrgError::Ingest {
        path: origin.to_path_buf(),
        record,
        source,
    };

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ingest_err(None, e))?
        .iter()
        .map(normalize_header)
        .collect();
    if let Some(column) = REQUIRED_COLUMNS
        .iter()
        .find(|c| !headers.iter().any(|h| h == **c))
    {
        return Err(OrgError::MissingColumn {
            path: origin.to_path_buf(),
            column: (*column).to_string(),
        });
    }
    reader.set_headers(headers);

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
        let record = idx as u64 + 1;
        let row = result.map_err(|e| ingest_err(Some(record), e))?;
        let salary = parse_salary(&row.salary).map_err(|message| OrgError::InvalidRecord {
            path: origin.to_path_buf(),
            record,
            message,
        })?;
        rows.push(RawEmployee {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            salary,
            manager_id: row.manager_id,
        });
    }

    debug!(rows = rows.len(), source = %origin.display(), "employee rows ingested");
    Ok(rows)
}

fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_salary(text: &str) -> std::result::Result<Decimal, String> {
    let salary = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|e| format!("salary {text:?} is not a decimal number ({e})"))?;
    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(format!("salary {text} is negative"));
    }
    Ok(salary)
}
