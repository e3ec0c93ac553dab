//! JSON configuration for the command-line tools.
//!
//! Each tool takes a single config path; optional sections fall back to
//! library defaults.

pub mod dataset;
pub mod organize;
