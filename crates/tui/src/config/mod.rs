use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: String,
    pub in_memory: bool,
    pub export_path: String,
    /// Initial budget limit; `0` means no budget.
    pub budget: f64,
    /// Log file; logging is off when unset, since stdout belongs to the UI.
    pub log_file: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: "expenses.db".to_string(),
            in_memory: false,
            export_path: "expenses.csv".to_string(),
            budget: 0.0,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn database_url(&self) -> String {
        if self.in_memory {
            engine::MEMORY_URL.to_string()
        } else {
            engine::sqlite_url(&self.database_path)
        }
    }

    /// Short label for the title bar.
    pub fn database_label(&self) -> &str {
        if self.in_memory {
            "in-memory"
        } else {
            &self.database_path
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "expense_tracker_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the database file path.
    #[arg(long)]
    database: Option<String>,
    /// Override the CSV export path.
    #[arg(long)]
    export: Option<String>,
    /// Override the initial budget limit.
    #[arg(long)]
    budget: Option<f64>,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut settings = from_sources(config_path)?;

    if let Some(database) = args.database {
        settings.database_path = database;
        settings.in_memory = false;
    }
    if let Some(export) = args.export {
        settings.export_path = export;
    }
    if let Some(budget) = args.budget {
        settings.budget = budget;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }

    Ok(settings)
}

fn from_sources(config_path: &str) -> Result<AppConfig> {
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("EXPENSES_TUI"));
    Ok(builder.build()?.try_deserialize()?)
}
