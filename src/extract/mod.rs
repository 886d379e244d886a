//! Study field extraction
//!
//! Maps one raw ClinicalTrials.gov v2 study document into a
//! [`NormalizedRecord`].
//!
//! # Overview
//!
//! Every output field is resolved from an ordered list of candidate dot-paths;
//! the first present value wins and anything else falls back to the field's
//! default. Extraction never fails: a study without an NCT id still produces a
//! record, and the caller decides whether to emit it.

pub mod path;
mod record;

pub use record::{Location, NormalizedRecord};

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use path::{element_to_string, first_present, first_string, resolve, scalar_to_string};
use serde_json::Value;

// ============================================================================
// Field paths
// ============================================================================

const NCT_ID: &[&str] = &[
    "protocolSection.identificationModule.nctId",
    "identificationModule.nctId",
];

const OFFICIAL_TITLE: &[&str] = &[
    "protocolSection.identificationModule.officialTitle",
    "protocolSection.identificationModule.briefTitle",
];

const OVERALL_STATUS: &[&str] = &["protocolSection.statusModule.overallStatus"];

const PHASE: &[&str] = &[
    "protocolSection.designModule.phases",
    "protocolSection.designModule.phase",
];

const CONDITIONS: &[&str] = &["protocolSection.conditionsModule.conditions"];

const LOCATIONS: &str = "protocolSection.contactsLocationsModule.locations";

const LAST_CHANGED_DATE: &[&str] = &[
    "protocolSection.statusModule.lastUpdatePostDate",
    "protocolSection.statusModule.lastChangedDate",
    "protocolSection.statusModule.lastKnownStatusDate",
];

/// Separator used when a study lists several phases
pub const PHASE_SEPARATOR: &str = ", ";

// ============================================================================
// Extraction
// ============================================================================

/// Extract a record stamped with the current wall-clock time
pub fn extract(study: &Value) -> NormalizedRecord {
    extract_at(study, Utc::now())
}

/// Extract a record stamped with `ingested_at`
pub fn extract_at(study: &Value, ingested_at: DateTime<Utc>) -> NormalizedRecord {
    NormalizedRecord {
        nct_id: first_string(study, NCT_ID),
        official_title: first_string(study, OFFICIAL_TITLE),
        overall_status: first_string(study, OVERALL_STATUS),
        phase: extract_phase(study),
        conditions: extract_conditions(study),
        locations: extract_locations(study),
        last_changed_date: first_string(study, LAST_CHANGED_DATE),
        ingestion_ts: format_timestamp(ingested_at),
    }
}

/// Format a timestamp as RFC 3339 UTC with second precision
/// (`2024-05-01T12:30:00+00:00`)
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn extract_phase(study: &Value) -> Option<String> {
    PHASE
        .iter()
        .filter_map(|candidate| resolve(study, candidate))
        .find_map(render_phase)
}

/// Sequences are joined element by element; a candidate that renders empty
/// falls through to the next one
fn render_phase(value: &Value) -> Option<String> {
    let rendered = match value {
        Value::Array(phases) => phases
            .iter()
            .filter_map(element_to_string)
            .collect::<Vec<_>>()
            .join(PHASE_SEPARATOR),
        other => scalar_to_string(other)?,
    };
    (!rendered.is_empty()).then_some(rendered)
}

fn extract_conditions(study: &Value) -> Vec<String> {
    match first_present(study, CONDITIONS) {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(other) => scalar_to_string(other).into_iter().collect(),
        None => Vec::new(),
    }
}

fn extract_locations(study: &Value) -> Vec<Location> {
    let Some(Value::Array(entries)) = resolve(study, LOCATIONS) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| entry.get("country").and_then(scalar_to_string))
        .map(Location::new)
        .collect()
}

// ============================================================================
// Ingestion clock
// ============================================================================

/// Wall clock for `ingestion_ts` that never runs backwards within a run
///
/// Readings are truncated to whole seconds. If the system clock steps back,
/// the last reading is repeated.
#[derive(Debug, Clone, Default)]
pub struct IngestionClock {
    last: Option<DateTime<Utc>>,
}

impl IngestionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time, clamped to be no earlier than the previous reading
    pub fn now(&mut self) -> DateTime<Utc> {
        self.observe(Utc::now())
    }

    fn observe(&mut self, reading: DateTime<Utc>) -> DateTime<Utc> {
        let reading = reading.trunc_subsecs(0);
        let ts = match self.last {
            Some(last) if last > reading => last,
            _ => reading,
        };
        self.last = Some(ts);
        ts
    }
}
