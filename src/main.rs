//! mwi-doctor CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use mwi_doctor::cli::Cli;
use mwi_doctor::report::{collect_report_with_progress, ReportOptions};
use mwi_doctor::ui::{Medium, ProgressSpinner};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Diagnostics go to stderr; stdout belongs to the report document.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("mwi_doctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mwi_doctor=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("mwi-doctor starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut options = ReportOptions::detected();
    options.log_file = cli.log_file.clone();
    if cli.plain {
        options.medium = Medium::Captured;
    }

    let spinner = ProgressSpinner::auto("Collecting diagnostics...");

    let document = collect_report_with_progress(&options, |title| {
        spinner.set_message(&format!("Collecting {title}..."));
    });
    spinner.finish_and_clear();

    // Single write; probe failures are report content, not process failures.
    print!("{document}");
    let _ = std::io::stdout().flush();

    ExitCode::SUCCESS
}
