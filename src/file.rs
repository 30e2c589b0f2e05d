// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::config::options::TableFormat;
use crate::csv;
use crate::data::ResultTable;
use crate::error::{Error, Result};

/// Write `table` to `path` in `format`, replacing any existing file.
/// Returns the path written to.
pub fn write_table(table: &ResultTable, path: &Path, format: TableFormat) -> Result<PathBuf> {
    ensure_parent(path)?;
    let written = match format {
        TableFormat::Csv => write_csv(table, path),
        TableFormat::Xlsx => write_xlsx(table, path),
    };
    written.map_err(|e| Error::write(path, e))?;

    info!(path = %path.display(), rows = table.len(), format = format.ext(), "wrote table");
    Ok(path.to_path_buf())
}

fn write_csv(table: &ResultTable, path: &Path) -> io::Result<()> {
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    csv::write_table(&mut out, &table.headers, &table.rows)?;
    out.flush()
}

fn write_xlsx(table: &ResultTable, path: &Path) -> io::Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let lines = std::iter::once(&table.headers).chain(table.rows.iter());
    for (r, line) in lines.enumerate() {
        let r = u32::try_from(r).map_err(|_| io::Error::other("too many rows for a worksheet"))?;
        for (c, cell) in line.iter().enumerate() {
            let c = u16::try_from(c).map_err(|_| io::Error::other("too many columns for a worksheet"))?;
            sheet.write_string(r, c, cell).map_err(io::Error::other)?;
        }
    }

    workbook.save(path).map_err(io::Error::other)
}

/// Create the parent directory of `path` if it has one and it is missing.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(|e| Error::write(path, e))?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
