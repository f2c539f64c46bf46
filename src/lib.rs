//! Transcov - translation key coverage auditor
//!
//! Transcov scans a project's source files for translation lookups, reads the
//! keys defined in its translation resource (`translations.csv` or
//! `translations.json`) and reports which keys are used but missing and which
//! are defined but never used.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report rendering)
//! - `config`: Configuration file loading and parsing
//! - `core`: Audit pipeline (locate, extract, read, compare)
//! - `errors`: Fatal audit errors

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
