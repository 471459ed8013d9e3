//! Row normalization
//!
//! Turns a raw CSV row into an [`Initiative`]. None of these steps fail:
//! messy input degrades to blanks, defaults or nulls.

use serde_json::Map;

use crate::domain::{ImportSettings, Initiative, UNNAMED_INITIATIVE};
use crate::source::Row;

/// Source column headers of the survey export.
pub mod columns {
    pub const NAME: &str = "Nom de l'initiative";
    pub const DESCRIPTION: &str = "Commentaire écrit";
    pub const VILLAGE: &str = "Lieu de l'initiative (village)";
    pub const COMMUNE: &str = "Lieu de l'initiative (commune)";
    pub const ACTOR_TYPE: &str = "Type d'acteur";
    pub const START_YEAR: &str = "Année de début de l'initiative";
    pub const ACTIVITIES: &str = "Maillon chaine de valeur ou activité";
    pub const EMAIL: &str = "Email";
    pub const PHONE: &str = "Numéro de téléphone";
    pub const PERSON_NAME: &str = "Nom de la personne interrogée";
    pub const WEBSITE: &str = "Site Internet";
    pub const SOCIAL_MEDIA: &str = "Réseaux sociaux";
    pub const LONGITUDE: &str = "x";
    pub const LATITUDE: &str = "y";

    pub const ALL: [&str; 14] = [
        NAME,
        DESCRIPTION,
        VILLAGE,
        COMMUNE,
        ACTOR_TYPE,
        START_YEAR,
        ACTIVITIES,
        EMAIL,
        PHONE,
        PERSON_NAME,
        WEBSITE,
        SOCIAL_MEDIA,
        LONGITUDE,
        LATITUDE,
    ];
}

/// Trimmed text; absent reads as empty.
pub fn clean_text(raw: Option<&str>) -> String {
    raw.unwrap_or_default().trim().to_string()
}

/// Trimmed text, or `None` when blank.
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    let text = clean_text(raw);
    (!text.is_empty()).then_some(text)
}

/// Parse a coordinate. Blank, non-numeric and non-finite input yield `None`.
pub fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split a comma-separated tag list, trimming and dropping empty entries.
pub fn split_activities(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

/// The social media cell becomes a one-element list, or an empty one.
pub fn social_media_links(raw: Option<&str>) -> Vec<String> {
    optional_text(raw).into_iter().collect()
}

impl Initiative {
    pub fn from_row(row: &Row, settings: &ImportSettings) -> Self {
        Self::from_lookup(|column| row.get(column), settings)
    }

    /// Build a record from any column lookup.
    pub fn from_lookup<'a, F>(get: F, settings: &ImportSettings) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let name = optional_text(get(columns::NAME))
            .unwrap_or_else(|| UNNAMED_INITIATIVE.to_string());

        let lon = parse_coordinate(get(columns::LONGITUDE));
        let lat = parse_coordinate(get(columns::LATITUDE));
        for (column, parsed) in [(columns::LONGITUDE, lon), (columns::LATITUDE, lat)] {
            if parsed.is_none() && optional_text(get(column)).is_some() {
                tracing::warn!(
                    "Initiative '{}': ignoring non-numeric {} value {:?}",
                    name,
                    column,
                    get(column).unwrap_or_default()
                );
            }
        }

        Self {
            description: clean_text(get(columns::DESCRIPTION)),
            village: clean_text(get(columns::VILLAGE)),
            commune: clean_text(get(columns::COMMUNE)),
            zone_intervention: None,
            actor_type: clean_text(get(columns::ACTOR_TYPE)),
            year: optional_text(get(columns::START_YEAR)),
            activities: split_activities(get(columns::ACTIVITIES)),
            lon,
            lat,
            contact_email: clean_text(get(columns::EMAIL)),
            contact_phone: clean_text(get(columns::PHONE)),
            person_name: clean_text(get(columns::PERSON_NAME)),
            website: clean_text(get(columns::WEBSITE)),
            social_media: social_media_links(get(columns::SOCIAL_MEDIA)),
            videos: Vec::new(),
            extra_fields: Map::new(),
            status: settings.status.clone(),
            user_id: settings.user_id,
            name,
        }
    }
}
