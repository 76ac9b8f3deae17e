//! Common utilities for the glean explainers.
//!
//! This crate provides shared infrastructure used by the front end:
//! - **Warning System** - colored terminal output for degraded input

pub mod warning;
