//! initiative-import: load GeoCollect initiatives from a CSV export into MySQL.
//!
//! The pipeline is linear: optionally purge the `initiatives` table, read the
//! CSV row by row, normalize each row into an [`Initiative`] and insert it,
//! then commit once.

pub mod config;
pub mod domain;
pub mod error;
pub mod import;
pub mod source;
pub mod store;
pub mod transform;

pub use config::DbConfig;
pub use domain::{ImportSettings, Initiative};
pub use error::{ImportError, Result};
pub use import::{run_import, ImportOptions, ImportSummary};
pub use store::{InitiativeStore, MySqlStore};
