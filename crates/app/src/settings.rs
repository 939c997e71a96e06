//! Handles settings for the command line front end. Configuration is read
//! from `settings.toml` (optional) and `EXPENSES_*` environment variables.
//!
//! ```toml
//! budget = 500.0
//!
//! [app]
//! level = "debug"
//!
//! [storage]
//! path = "expenses.db"
//! ```
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
    pub path: String,
    #[serde(default)]
    pub in_memory: bool,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub storage: Storage,
    /// Default budget limit for `summary`; `0` means no budget.
    pub budget: f64,
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("storage.path", "expenses.db")?
            .set_default("storage.in_memory", false)?
            .set_default("budget", 0.0)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("EXPENSES").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Connection string for the configured store.
    pub fn database_url(&self) -> String {
        if self.storage.in_memory {
            engine::MEMORY_URL.to_string()
        } else {
            engine::sqlite_url(&self.storage.path)
        }
    }
}
