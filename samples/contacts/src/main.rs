//! contacts - interactive address book
//!
//! Usage:
//!   contacts [--quiet] [--log-filter <FILTER>]
//!
//! Logs go to stderr; `RUST_LOG` takes precedence over `--log-filter`.

use std::io;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use contacts::Session;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = "Interactive address book backed by an AVL tree")]
struct Cli {
    /// Hide the menu and prompts, printing only results
    #[arg(long, short)]
    quiet: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "contacts=info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock()).quiet(cli.quiet);
    session.run()?;

    tracing::info!(size = session.book().len(), "session finished");
    Ok(())
}
