// src/runner.rs
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::{
    config::options::{AppOptions, ExportOptions},
    data::{AthletePayload, ResultTable},
    error::Result,
    fetch::fetch,
    file,
    normalize::normalize,
    progress::{Output, Progress},
    report::{summarize, Summary},
    store,
};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub subject: String,
    pub files_written: Vec<PathBuf>,
    pub summary: Summary,
}

/* ---------------- Network pipeline ---------------- */

/// Fetch → normalize → archive + table.
/// Normalization runs before any write, so a fetch or payload failure leaves no files.
pub fn run_fetch(
    subject_id: &str,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("正在获取运动员ID {subject_id} 的比赛数据..."));
    }

    let payload = fetch(subject_id, &opts.fetch).inspect_err(|e| error!("fetch failed: {e}"))?;
    let (table, name) = normalize(&payload, opts.export.projection.projection())?;

    let archive_path = opts.export.archive_path(&name);
    let archived = store::archive_raw(&payload, &archive_path)?;
    if let Some(p) = progress.as_deref_mut() {
        p.file_written(Output::Archive, &archived);
    }

    let table_path = persist_table(&table, &name, &opts.export)?;
    if let Some(p) = progress.as_deref_mut() {
        p.file_written(Output::Table, &table_path);
    }

    let summary = summarize(&table, opts.export.projection.projection());
    if let Some(p) = progress.as_deref_mut() {
        p.finish(&summary);
    }
    Ok(RunSummary { subject: name, files_written: vec![archived, table_path], summary })
}

/* ---------------- Archive replay ---------------- */

/// Archive on disk → normalize → table. Never touches the network.
pub fn run_replay(
    archive: &Path,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("正在读取 {}", archive.display()));
    }

    let payload: AthletePayload = store::load_archive(archive)?;
    let (table, name) = normalize(&payload, opts.export.projection.projection())?;
    info!(archive = %archive.display(), subject = %name, rows = table.len(), "replaying archive");

    let table_path = persist_table(&table, &name, &opts.export)?;
    if let Some(p) = progress.as_deref_mut() {
        p.file_written(Output::Table, &table_path);
    }

    let summary = summarize(&table, opts.export.projection.projection());
    if let Some(p) = progress.as_deref_mut() {
        p.finish(&summary);
    }
    Ok(RunSummary { subject: name, files_written: vec![table_path], summary })
}

/* ---------------- helpers ---------------- */

fn persist_table(table: &ResultTable, name: &str, export: &ExportOptions) -> Result<PathBuf> {
    file::write_table(table, &export.table_path(name), export.format)
}
