use std::str::FromStr;

use sea_orm::{
    DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector,
    sqlx::{
        self, ConnectOptions as _,
        sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    },
};

use crate::ResultEngine;

mod expenses;

/// Connection string for a throwaway in-memory store.
pub const MEMORY_URL: &str = "sqlite::memory:";

/// Build the connection string for a file-backed store, creating the file if
/// missing.
pub fn sqlite_url(path: &str) -> String {
    format!("sqlite:{path}?mode=rwc")
}

/// The storage gateway: one long-lived handle shared by every operation.
///
/// The pool holds exactly one connection and never reaps it, so reads and
/// writes are serialized and an in-memory store lives as long as the engine.
#[derive(Debug, Clone)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Open the store at `url` with a single pooled connection.
    ///
    /// The schema is not touched; call [`Engine::ensure_schema`] before the
    /// first read.
    pub async fn open(url: &str) -> ResultEngine<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(conn_err)?
            .disable_statement_logging();
        // idle or aged-out connections must not be recycled: for
        // `sqlite::memory:` a new connection is a new, empty database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(conn_err)
            .inspect_err(|err| {
                tracing::error!("failed to open expense store at {url}: {err}");
            })?;
        tracing::info!("opened expense store at {url}");
        Self::builder()
            .database(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
            .build()
            .await
    }

    pub fn database(&self) -> &DatabaseConnection {
        &self.database
    }

    /// Release the underlying connection.
    pub async fn close(self) -> ResultEngine<()> {
        self.database.close().await?;
        tracing::debug!("expense store closed");
        Ok(())
    }
}

fn conn_err(err: sqlx::Error) -> DbErr {
    DbErr::Conn(RuntimeErr::SqlxError(err))
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
