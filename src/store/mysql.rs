//! MySQL backend

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::{MySql, Transaction};

use super::{insert_sql, purge_sql, BindValue, InitiativeStore};
use crate::config::DbConfig;
use crate::domain::Initiative;
use crate::error::Result;

pub struct MySqlStore {
    pool: MySqlPool,
    tx: Option<Transaction<'static, MySql>>,
    insert_sql: String,
    purge_sql: String,
}

impl MySqlStore {
    /// Open a single connection to the configured database.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        tracing::debug!(
            "Connecting to mysql://{}@{}:{}/{}",
            config.user,
            config.host,
            config.port,
            config.name
        );
        Self::connect_with(config.connect_options()).await
    }

    pub async fn connect_with(options: MySqlConnectOptions) -> Result<Self> {
        let pool = MySqlPoolOptions::new().max_connections(1).connect_with(options).await?;
        Ok(Self { pool, tx: None, insert_sql: insert_sql(), purge_sql: purge_sql() })
    }
}

impl InitiativeStore for MySqlStore {
    async fn purge(&mut self) -> Result<u64> {
        // Autocommit applies outside an explicit transaction.
        let result = sqlx::query(&self.purge_sql).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn insert(&mut self, initiative: &Initiative) -> Result<()> {
        let values = initiative.insert_values()?;
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => self.pool.begin().await?,
        };
        let tx = self.tx.insert(tx);

        let mut query = sqlx::query(&self.insert_sql);
        for (_, value) in values {
            query = match value {
                BindValue::Text(v) => query.bind(v),
                BindValue::NullableText(v) => query.bind(v),
                BindValue::NullableFloat(v) => query.bind(v),
                BindValue::Integer(v) => query.bind(v),
            };
        }
        query.execute(&mut **tx).await?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<()> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
        }
        Ok(())
    }

    async fn close(mut self) -> Result<()> {
        // Uncommitted work is rolled back when the transaction drops.
        self.tx.take();
        self.pool.close().await;
        Ok(())
    }
}
