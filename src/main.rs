//! kitchen - interactive order-taking simulator
//!
//! Usage:
//!   kitchen                          start the interactive prompt
//!   kitchen --order "night, 1, 2"    process one order and exit

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use kitchen::config::ShellConfig;
use kitchen::shell::{Shell, write_outcome};
use kitchen::workflow::process_order;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kitchen")]
#[command(about = "Takes morning and night orders and prints the receipt")]
struct Cli {
    /// Process a single order line, e.g. "morning, 1, 2, 3", instead of prompting
    #[arg(long, value_name = "LINE")]
    order: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if let Some(line) = cli.order {
        let outcome = process_order(&line);
        write_outcome(&outcome, &mut output)?;
        output.flush()?;
        return Ok(if outcome.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let config = ShellConfig::from_env().unwrap_or_else(|error| {
        tracing::warn!("Failed to load configuration from environment: {error}");
        ShellConfig::default()
    });

    Shell::new(config).run(io::stdin().lock(), &mut output)?;
    Ok(ExitCode::SUCCESS)
}
