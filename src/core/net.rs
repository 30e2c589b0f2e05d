// src/core/net.rs

// Blocking HTTP GET returning a JSON document.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::consts;
use crate::config::options::FetchOptions;
use crate::error::{Error, Result};

fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_static(consts::USER_AGENT));
    h.insert(ACCEPT, HeaderValue::from_static(consts::ACCEPT));
    h.insert(REFERER, HeaderValue::from_static(consts::REFERER));
    h
}

fn client(opts: &FetchOptions, url: &str) -> Result<Client> {
    // An explicit `None` overrides reqwest's own default timeout
    Client::builder()
        .default_headers(default_headers())
        .timeout(opts.timeout)
        .build()
        .map_err(|source| Error::Fetch { url: s!(url), source })
}

/// One GET, no retry. Non-2xx and non-JSON bodies are fetch failures.
pub fn http_get_json(url: &str, opts: &FetchOptions) -> Result<Value> {
    let fail = |source| Error::Fetch { url: s!(url), source };

    debug!(%url, timeout = ?opts.timeout, "GET");
    let resp = client(opts, url)?.get(url).send().map_err(fail)?;

    let status = resp.status();
    debug!(%url, %status, "response");
    let resp = resp.error_for_status().map_err(|e| {
        warn!(%url, %status, "non-success status");
        fail(e)
    })?;

    resp.json::<Value>().map_err(fail)
}
