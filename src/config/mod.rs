//! Database configuration
//!
//! Connection settings come from `DB_*` environment variables (optionally
//! seeded from a `.env` file), each falling back to a local default.

pub mod loader;

pub use loader::{load_db_config, load_dotenv};

use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;

/// Connection parameters for the target MySQL database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    /// Database (schema) name.
    pub name: String,
    pub port: u16,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            password: String::new(),
            name: "geocollect".to_string(),
            port: 3306,
        }
    }
}

impl DbConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}
