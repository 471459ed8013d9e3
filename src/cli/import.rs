//! Import command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use initiative_import::config::{load_db_config, load_dotenv};
use initiative_import::domain::{DEFAULT_STATUS, DEFAULT_USER_ID};
use initiative_import::{run_import, ImportOptions, ImportSettings, InitiativeStore, MySqlStore};

#[derive(Args)]
pub struct ImportArgs {
    /// Path to the CSV file to import.
    #[arg(value_name = "CSV_PATH")]
    pub csv_path: PathBuf,

    /// Delete existing initiatives before import.
    #[arg(long)]
    pub purge: bool,

    /// Status value to set on imported rows.
    #[arg(long, value_name = "STATUS", default_value = DEFAULT_STATUS)]
    pub status: String,

    /// User id to assign to imported rows.
    #[arg(long, value_name = "ID", default_value_t = DEFAULT_USER_ID)]
    pub user_id: i64,
}

pub fn run(args: ImportArgs) -> Result<()> {
    load_dotenv();
    let db_config = load_db_config()?;

    let options = ImportOptions {
        purge: args.purge,
        settings: ImportSettings { status: args.status, user_id: args.user_id },
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        let mut store = MySqlStore::connect(&db_config).await.with_context(|| {
            format!(
                "failed to connect to database '{}' on {}:{}",
                db_config.name, db_config.host, db_config.port
            )
        })?;

        let summary = run_import(&mut store, &args.csv_path, &options)
            .await
            .with_context(|| format!("import of {} failed", args.csv_path.display()))?;
        store.close().await?;

        tracing::debug!("Import summary: {:?}", summary);
        Ok::<_, anyhow::Error>(())
    })?;

    println!("✔ Import terminé avec succès.");
    Ok(())
}
