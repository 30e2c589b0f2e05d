// src/normalize.rs
//! Projects the `Results` list of a payload into table rows.
//!
//! One row per record, in source order; nothing is filtered, sorted or
//! coerced. A record that is not an object still produces a row (all empty)
//! so row count always equals record count.

use serde_json::{Map, Value};
use tracing::debug;

use crate::data::{AthletePayload, ResultTable, RESULTS_KEY};
use crate::error::{Error, Result};
use crate::specs::results::{FieldSpec, Projection};

/// Normalize `payload` through `projection`. Returns the table and the subject name.
pub fn normalize(payload: &AthletePayload, projection: &Projection) -> Result<(ResultTable, String)> {
    let results = payload.results().ok_or_else(|| {
        Error::MalformedPayload(format!("missing or non-array `{RESULTS_KEY}`"))
    })?;
    let name = s!(payload.subject_name());

    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|record| project_record(record.as_object(), projection))
        .collect();

    debug!(subject = %name, projection = projection.name, rows = rows.len(), "normalized");
    Ok((ResultTable { headers: projection.headers(), rows }, name))
}

fn project_record(record: Option<&Map<String, Value>>, projection: &Projection) -> Vec<String> {
    projection
        .fields
        .iter()
        .map(|f| record.map(|r| lookup(r, f)).unwrap_or_default())
        .collect()
}

fn lookup(record: &Map<String, Value>, field: &FieldSpec) -> String {
    field
        .lookup
        .keys()
        .iter()
        .find_map(|k| present(record, k))
        .map(cell_text)
        .unwrap_or_default()
}

// null is treated the same as a missing key
fn present<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| !v.is_null())
}

/// Text of a cell as received: strings verbatim, everything else as JSON text.
pub fn cell_text(v: &Value) -> String {
    match v {
        Value::Null => s!(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
