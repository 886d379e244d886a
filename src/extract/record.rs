//! Normalized output record

use serde::{Deserialize, Serialize};

/// A single location entry, reduced to its country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
}

impl Location {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}

/// Flat record emitted for every study that carries an NCT identifier
///
/// Field order matches the downstream table schema. Absent optional fields
/// serialize as `null`; `conditions` and `locations` are always arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub nct_id: Option<String>,
    pub official_title: Option<String>,
    pub overall_status: Option<String>,
    pub phase: Option<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub locations: Vec<Location>,
    pub last_changed_date: Option<String>,
    pub ingestion_ts: String,
}

impl NormalizedRecord {
    /// Primary key, if the study had one
    pub fn primary_key(&self) -> Option<&str> {
        self.nct_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Whether this record may be written to the sink
    pub fn is_emittable(&self) -> bool {
        self.primary_key().is_some()
    }
}
