use anyhow::Result;
use std::fs::{self, OpenOptions};

use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};
use nytgames_core::{
    config::{self, AppConfig},
    games, report, HttpFetcher,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging()?;

    config::ensure_default_config()?;
    let config = AppConfig::load()?;

    let date = games::today();
    let fetcher = HttpFetcher::new();
    let pipeline = config.pipeline();

    info!("building report for {date}");
    let text = report::assemble(&fetcher, &pipeline, date, config.include_sudoku).await?;
    let path = report::write_report(&config.report_dir, date, &text)?;
    println!("{}", path.display());
    Ok(())
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("nytgames.log");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_ansi(false)
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
