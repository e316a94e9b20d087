mod cli;
mod cmd;
mod error;
mod format;
mod io;

use std::io::IsTerminal as _;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::cli::{Cli, Command};
use crate::cmd::check::CheckOptions;
use crate::error::CliError;

/// Installs the stderr log subscriber. `RUST_LOG` overrides `default_directive`.
fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Check {
            rule,
            event_id,
            data,
        } => cmd::check::run(
            rule,
            data,
            &CheckOptions {
                event_id,
                format: cli.format,
                quiet: cli.quiet,
                max_file_size: cli.max_file_size,
            },
        ),
        Command::Pattern { rule } => cmd::pattern::run(rule, cli.format, cli.max_file_size),
        Command::Version => {
            println!("{}", evlog_core::version());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_directive());

    if let Err(e) = dispatch(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}
