//! initiative-import: load GeoCollect initiatives from a CSV export into MySQL.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
