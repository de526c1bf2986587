pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod exit;
pub mod hierarchy;
pub mod ingest;
pub mod reporting;
pub mod types;
