// src/analysis/mod.rs
//! Hierarchy analyses: reporting-line depth and salary bands.

pub mod depth;
pub mod engine;
pub mod salary;
pub mod sink;

pub use depth::DepthAnalyzer;
pub use engine::Engine;
pub use salary::{SalaryBand, SalaryBandAnalyzer};
pub use sink::FindingSink;
