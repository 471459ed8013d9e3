//! Library error type

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ImportError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Environment-sourced database settings could not be read.
    #[error("invalid database configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("failed to read CSV file {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A list or mapping column could not be serialized to JSON text.
    #[error("failed to encode {column}: {source}")]
    Encode {
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ImportError {
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv { path: path.into(), source }
    }
}

impl From<figment::Error> for ImportError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
