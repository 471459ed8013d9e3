//! Core data types for the initiative import

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ImportError, Result};

/// Status stamped on imported rows when none is given.
pub const DEFAULT_STATUS: &str = "approved";

/// Owner user id stamped on imported rows when none is given.
pub const DEFAULT_USER_ID: i64 = 2;

/// Placeholder used when a row has no initiative name.
pub const UNNAMED_INITIATIVE: &str = "Sans nom";

/// Values fixed for every row of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    pub status: String,
    pub user_id: i64,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self { status: DEFAULT_STATUS.to_string(), user_id: DEFAULT_USER_ID }
    }
}

/// One row of the `initiatives` table.
///
/// List and mapping fields are kept typed here and only turned into JSON
/// text when bound to the insert statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Initiative {
    pub name: String,
    pub description: String,
    pub village: String,
    pub commune: String,
    pub zone_intervention: Option<String>,
    pub actor_type: String,
    pub year: Option<String>,
    pub activities: Vec<String>,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub contact_email: String,
    pub contact_phone: String,
    pub person_name: String,
    pub website: String,
    pub social_media: Vec<String>,
    pub videos: Vec<String>,
    pub extra_fields: Map<String, Value>,
    pub status: String,
    pub user_id: i64,
}

/// JSON text for the list and mapping columns, in insert order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedColumns {
    pub activities: String,
    pub social_media: String,
    pub videos: String,
    pub extra_fields: String,
}

impl Initiative {
    pub fn encoded_columns(&self) -> Result<EncodedColumns> {
        Ok(EncodedColumns {
            activities: encode("activities", &self.activities)?,
            social_media: encode("social_media", &self.social_media)?,
            videos: encode("videos", &self.videos)?,
            extra_fields: encode("extra_fields", &self.extra_fields)?,
        })
    }
}

fn encode<T: Serialize + ?Sized>(column: &'static str, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|source| ImportError::Encode { column, source })
}
