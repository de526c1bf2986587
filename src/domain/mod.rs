// src/domain/mod.rs
//! Employee records and the directory that owns them.

mod directory;
mod employee;

pub use directory::{Directory, DuplicatePolicy};
pub use employee::{Employee, EmployeeId};
