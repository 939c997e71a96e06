//! Storage and analysis core of the expense analyzer.
//!
//! [`Engine`] owns the single handle to the `expenses` table and exposes the
//! four repository operations: [`Engine::ensure_schema`], [`Engine::insert`],
//! [`Engine::fetch_all`] and [`Engine::delete`]. The [`views`] module computes
//! the read-only aggregates shown next to the table and [`export`] turns the
//! fetched rows into CSV.

pub use categories::Category;
pub use error::EngineError;
pub use expenses::Expense;
pub use ops::{Engine, EngineBuilder, MEMORY_URL, sqlite_url};

mod categories;
mod error;
mod expenses;
mod ops;
mod util;

pub mod export;
pub mod views;

pub use util::{DATE_FORMAT, MISSING_DETAILS, require_details};

type ResultEngine<T> = Result<T, EngineError>;
