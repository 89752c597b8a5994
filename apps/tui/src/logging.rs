use crate::config::AppConfig;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// The TUI owns the terminal, so in that mode logs are appended to a file.
/// Headless runs log to stderr and keep stdout for the report.
pub fn init_logging(config: &AppConfig, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if headless {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init()?;
    }

    tracing::debug!(endpoint = %config.endpoint, headless, "logging initialised");
    Ok(())
}
