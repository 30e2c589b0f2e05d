// src/progress.rs
use std::path::Path;

use crate::report::Summary;

/// Status reporting for a pipeline run.
/// The CLI prints these lines; tests pass `None` or a recorder.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// An output file was written (archive or table).
    fn file_written(&mut self, _what: Output, _path: &Path) {}

    /// Called once after all outputs are written.
    fn finish(&mut self, _summary: &Summary) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    Archive,
    Table,
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
