// src/lib.rs
//! World Aquatics athlete results scraper.
//!
//! ```text
//! fetch ──► normalize ──► store::archive_raw   (raw JSON)
//!                  │  └──► file::write_table    (CSV / XLSX)
//!                  └─────► report::summarize    (stdout)
//!
//! store::load_archive ──► normalize ──► file::write_table
//! ```

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod fetch;
pub mod file;
pub mod log;
pub mod normalize;
pub mod progress;
pub mod report;
pub mod runner;
pub mod specs;
pub mod store;

pub use data::{AthletePayload, ResultTable};
pub use error::{Error, Result};
