// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a single pipeline run. None of them are retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure, timeout, non-2xx status, or a body that is not JSON.
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Athlete id that is not a plain decimal number.
    #[error("invalid athlete id {0:?}: expected digits only")]
    InvalidSubject(String),

    /// Payload (fetched or archived) lacks a usable `Results` list.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// An output file could not be written. Outputs written before it stay.
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An archive could not be read from disk.
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write { path: path.into(), source }
    }

    /// Process exit code for this failure; 1 is left for usage/setup errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidSubject(_) => 1,
            Error::Fetch { .. } => 2,
            Error::MalformedPayload(_) => 3,
            Error::Write { .. } => 4,
            Error::Read { .. } => 5,
        }
    }
}
