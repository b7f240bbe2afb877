//! banking_system - console demo
//!
//! Runs the fixed deposit/withdraw/interest sequence and prints balances and
//! transaction histories.

use banking_system::{demo, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// Logs go to stderr; stdout carries the report.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "banking_system=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env()?;
    tracing::info!(environment = %config.environment, "Starting banking demo");

    let run = demo::run(&config)?;

    for line in run.report(&config.currency_symbol) {
        println!("{}", line);
    }

    Ok(())
}
