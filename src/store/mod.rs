//! Persistence of imported initiatives

use crate::domain::Initiative;
use crate::error::Result;

pub mod mysql;

pub use mysql::MySqlStore;

/// Target table of the import.
pub const TABLE: &str = "initiatives";

/// Columns written by an insert, in bind order.
pub const INSERT_COLUMNS: [&str; 19] = [
    "initiative",
    "description",
    "village",
    "commune",
    "zone_intervention",
    "actor_type",
    "year",
    "activities",
    "lat",
    "lon",
    "contact_email",
    "contact_phone",
    "person_name",
    "website",
    "social_media",
    "videos",
    "extra_fields",
    "status",
    "user_id",
];

/// Parameterized insert statement using `?` placeholders.
pub fn insert_sql() -> String {
    let placeholders = vec!["?"; INSERT_COLUMNS.len()].join(", ");
    format!("INSERT INTO {} ({}) VALUES ({})", TABLE, INSERT_COLUMNS.join(", "), placeholders)
}

/// Unconditional delete of every row of the target table.
pub fn purge_sql() -> String {
    format!("DELETE FROM {}", TABLE)
}

/// A value bound to one insert placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    NullableText(Option<String>),
    NullableFloat(Option<f64>),
    Integer(i64),
}

impl Initiative {
    /// Values for [`insert_sql`], paired with their column, in bind order.
    pub fn insert_values(&self) -> Result<Vec<(&'static str, BindValue)>> {
        use BindValue::*;

        let encoded = self.encoded_columns()?;
        Ok(vec![
            ("initiative", Text(self.name.clone())),
            ("description", Text(self.description.clone())),
            ("village", Text(self.village.clone())),
            ("commune", Text(self.commune.clone())),
            ("zone_intervention", NullableText(self.zone_intervention.clone())),
            ("actor_type", Text(self.actor_type.clone())),
            ("year", NullableText(self.year.clone())),
            ("activities", Text(encoded.activities)),
            ("lat", NullableFloat(self.lat)),
            ("lon", NullableFloat(self.lon)),
            ("contact_email", Text(self.contact_email.clone())),
            ("contact_phone", Text(self.contact_phone.clone())),
            ("person_name", Text(self.person_name.clone())),
            ("website", Text(self.website.clone())),
            ("social_media", Text(encoded.social_media)),
            ("videos", Text(encoded.videos)),
            ("extra_fields", Text(encoded.extra_fields)),
            ("status", Text(self.status.clone())),
            ("user_id", Integer(self.user_id)),
        ])
    }
}

/// A database that can receive an import.
///
/// `purge` takes effect immediately. Inserts accumulate in one open
/// transaction until `commit`; dropping the store without committing
/// discards them.
#[allow(async_fn_in_trait)]
pub trait InitiativeStore {
    /// Delete every row of the target table and commit. Returns rows removed.
    async fn purge(&mut self) -> Result<u64>;

    async fn insert(&mut self, initiative: &Initiative) -> Result<()>;

    async fn commit(&mut self) -> Result<()>;

    async fn close(self) -> Result<()>;
}
