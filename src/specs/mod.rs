// src/specs/mod.rs
//! # Field specs
//!
//! Where the ground truth lives in an athlete results payload and which of it
//! ends up in a table. A spec only *describes* columns; [`crate::normalize`]
//! walks the payload and [`crate::report`] reads columns back by role.
//!
//! ## Conventions
//! - Column order is projection order, in every output format.
//! - Headers are the human-readable labels, never the API key names.
//! - Lookups never coerce: a missing key is an empty cell.
pub mod results;
