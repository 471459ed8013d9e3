//! The import pipeline: purge, read, transform, insert, commit.

use std::path::Path;

use crate::domain::{ImportSettings, Initiative};
use crate::error::Result;
use crate::source::CsvSource;
use crate::store::InitiativeStore;
use crate::transform::columns;

#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Delete all existing rows before inserting.
    pub purge: bool,
    pub settings: ImportSettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows deleted by the purge, if one ran.
    pub purged: Option<u64>,
    pub inserted: usize,
}

/// Load every row of `csv_path` into `store`.
///
/// The purge is committed before the file is opened, so a later failure
/// leaves the table empty. Inserts are committed once, after the last row.
pub async fn run_import<S: InitiativeStore>(
    store: &mut S,
    csv_path: &Path,
    options: &ImportOptions,
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    if options.purge {
        let removed = store.purge().await?;
        tracing::info!("Purged {} existing initiatives", removed);
        summary.purged = Some(removed);
    }

    let mut source = CsvSource::open(csv_path)?;
    let missing: Vec<&str> =
        columns::ALL.iter().copied().filter(|c| !source.headers().contains(c)).collect();
    if !missing.is_empty() {
        tracing::info!(
            "Columns absent from {}, read as blank: {}",
            source.path().display(),
            missing.join(", ")
        );
    }

    for row in source.rows() {
        let row = row?;
        let initiative = Initiative::from_row(&row, &options.settings);
        let line = row.line().unwrap_or_default();
        tracing::debug!("Inserting '{}' (line {})", initiative.name, line);
        store.insert(&initiative).await?;
        summary.inserted += 1;
    }

    store.commit().await?;
    tracing::info!("Imported {} initiatives from {}", summary.inserted, source.path().display());
    Ok(summary)
}
