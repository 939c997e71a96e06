mod app;
mod config;
mod error;
mod form;
mod ui;

use std::{fs::OpenOptions, sync::Mutex};

use engine::Engine;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    init_logging(&config)?;

    let engine = Engine::open(&config.database_url()).await?;
    engine.ensure_schema().await?;
    tracing::info!(database = config.database_label(), "expense tracker started");

    let mut app = app::App::new(&config, engine);
    let result = app.run().await;
    app.into_engine().close().await?;
    result
}

/// Logs go to a file only; stdout belongs to the terminal UI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_tracker_tui={level},engine={level},migration={level}",
            level = config.log_level
        ))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
