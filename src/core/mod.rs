//! Core audit engine.
//!
//! The audit is a straight pipeline with no shared state between phases:
//!
//! 1. **Locate** (`locator`): confirm a project marker exists, enumerate
//!    source files and find the translation resource.
//! 2. **Extract** (`extract`): run the configured patterns over every source
//!    file and collect the used keys.
//! 3. **Read** (`resource`): load the available keys from the resource.
//! 4. **Compare** (`coverage`): split keys into covered, missing and unused.
//!
//! `audit` wires the phases together.

pub mod audit;
pub mod coverage;
pub mod extract;
pub mod keys;
pub mod locator;
pub mod resource;

pub use audit::{AuditOptions, AuditOutcome, run_audit};
pub use coverage::CoverageReport;
pub use keys::KeySet;
