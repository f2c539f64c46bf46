//! The audit pipeline: locate → extract + read → compare.

use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    core::{
        coverage::CoverageReport,
        extract::{FileError, KeyExtractor},
        locator::{ProjectLayout, locate},
        resource::load_available_keys,
    },
    errors::AuditError,
};

/// Options that do not come from the config file.
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// Use this resource file instead of searching by name.
    pub resource: Option<PathBuf>,
    /// Treat unreadable source files as fatal.
    pub strict: bool,
    pub verbose: bool,
}

/// Everything one audit run produced.
#[derive(Debug)]
pub struct AuditOutcome {
    pub layout: ProjectLayout,
    pub report: CoverageReport,
    /// Source files read successfully.
    pub files_scanned: usize,
    /// Source files that could not be read and were skipped.
    pub file_errors: Vec<FileError>,
    /// Format the resource was read as.
    pub resource_format: &'static str,
    /// Set when the translation resource could not be loaded.
    pub resource_warning: Option<String>,
}

pub fn run_audit(
    root: &Path,
    config: &Config,
    options: &AuditOptions,
) -> Result<AuditOutcome, AuditError> {
    let extractor = KeyExtractor::from_config(&config.patterns)?;
    let layout = locate(
        root,
        config,
        options.resource.as_deref(),
        options.verbose,
    )?;

    let extraction = extractor.extract_used_keys(&layout.source_files);
    if options.strict && !extraction.errors.is_empty() {
        return Err(AuditError::SourceRead {
            count: extraction.errors.len(),
        });
    }

    let resource = load_available_keys(&layout.resource_file);
    let report = CoverageReport::compute(&extraction.keys, &resource.keys);

    Ok(AuditOutcome {
        layout,
        report,
        files_scanned: extraction.files_scanned,
        file_errors: extraction.errors,
        resource_format: resource.format,
        resource_warning: resource.warning,
    })
}
