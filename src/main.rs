mod error;
mod models;
mod run;
mod store;
mod ui;
mod view;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File that receives log output. The TUI owns the terminal, so logs never go
/// to stdout or stderr.
const LOG_PATH_ENV: &str = "BUDGETRING_LOG";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    init_tracing()?;

    match args.len() {
        0 | 1 => {
            let store = store::BudgetStore::seeded(models::Period::current())
                .context("Built-in categories are invalid")?;
            run::as_tui(store)
        }
        _ => run::as_cli(&args),
    }
}

fn init_tracing() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_PATH_ENV) else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.to_string_lossy()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "budgetring=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}
