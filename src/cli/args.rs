use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "orgcheck",
    version,
    about = "Reporting-line and salary-band checks for employee CSV exports"
)]
pub struct Cli {
    /// Employee CSV file (columns: id, firstName, lastName, salary, managerId)
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,
    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,
    /// Settings file (defaults to ./orgcheck.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
    /// Exit with a non-zero code when any finding is reported
    #[arg(long)]
    pub fail_on_findings: bool,
}
