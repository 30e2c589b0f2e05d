// src/store.rs
//! Raw payload archive: written once per fetch, read back by the replay pipeline.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::data::AthletePayload;
use crate::error::{Error, Result};
use crate::file::ensure_parent;

const INDENT: &[u8] = b"    ";

/// Pretty-printed JSON, 4-space indent, non-ASCII written literally.
pub fn to_archive_bytes(payload: &AthletePayload) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    payload.raw().serialize(&mut ser)?;
    Ok(buf)
}

/// Write `payload` to `path`, replacing whatever is there.
pub fn archive_raw(payload: &AthletePayload, path: &Path) -> Result<PathBuf> {
    ensure_parent(path)?;
    let bytes = to_archive_bytes(payload).map_err(|e| Error::write(path, e.into()))?;

    let file = File::create(path).map_err(|e| Error::write(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(&bytes)
        .and_then(|_| out.flush())
        .map_err(|e| Error::write(path, e))?;

    info!(path = %path.display(), bytes = bytes.len(), "archived raw payload");
    Ok(path.to_path_buf())
}

/// Read an archive written by [`archive_raw`] (or any JSON file of the same shape).
pub fn load_archive(path: &Path) -> Result<AthletePayload> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = serde_json::from_str(&text).map_err(|e| {
        Error::MalformedPayload(format!("{} is not valid JSON: {e}", path.display()))
    })?;
    Ok(AthletePayload::new(raw))
}
