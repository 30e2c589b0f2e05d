//! Shared helpers for the integration tests.
//!
//! `mod common; use common::*;` at the top of each test file.

#![allow(dead_code)]

pub mod fake_api;
pub mod fixtures;

pub use fake_api::*;
pub use fixtures::*;
