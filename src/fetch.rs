// src/fetch.rs
use tracing::info;

use crate::config::options::FetchOptions;
use crate::core::net;
use crate::data::AthletePayload;
use crate::error::Result;

/// Fetch the full results history of one athlete.
/// Single request; the caller decides what a failure means for the run.
pub fn fetch(subject_id: &str, opts: &FetchOptions) -> Result<AthletePayload> {
    let url = opts.results_url(subject_id)?;
    let doc = net::http_get_json(&url, opts)?;
    info!(%subject_id, %url, "fetched results payload");
    Ok(AthletePayload::new(doc))
}
