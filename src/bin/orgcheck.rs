use clap::Parser;
use colored::Colorize;
use orgcheck_core::cli::{self, Cli};
use orgcheck_core::error::OrgError;
use orgcheck_core::exit::OrgCheckExit;
use tracing_subscriber::EnvFilter;

fn main() -> OrgCheckExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli::handle_analyze(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            e.downcast_ref::<OrgError>()
                .map_or(OrgCheckExit::Error, OrgError::exit_code)
        }
    }
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "orgcheck_core=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
