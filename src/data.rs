// src/data.rs
//
// Shapes shared by both pipelines.
//
// - AthletePayload: the top-level JSON document exactly as fetched or archived.
//                   Read-only; the archive is written from it byte-for-byte.
// - ResultTable:    projected rows in source order plus their header labels.

use serde_json::Value;

use crate::config::consts::UNKNOWN_SUBJECT;

pub const NAME_KEY: &str = "FullName";
pub const RESULTS_KEY: &str = "Results";

#[derive(Clone, Debug, PartialEq)]
pub struct AthletePayload {
    raw: Value,
}

impl AthletePayload {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// `FullName`, or "Unknown" when absent or not a string.
    pub fn subject_name(&self) -> &str {
        self.raw
            .get(NAME_KEY)
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_SUBJECT)
    }

    /// `Results`, if present and an array.
    pub fn results(&self) -> Option<&[Value]> {
        self.raw.get(RESULTS_KEY)?.as_array().map(Vec::as_slice)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of column `ix`; short rows yield "".
    pub fn column(&self, ix: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |r| r.get(ix).map(String::as_str).unwrap_or(""))
    }
}
