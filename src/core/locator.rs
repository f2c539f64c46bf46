//! Project detection and file enumeration.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::{config::Config, errors::AuditError};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of walking the project tree.
pub struct ScanResult {
    /// All files under the root, sorted by path.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

impl ScanResult {
    /// Files whose extension equals `ext` (case-insensitive, without the dot).
    pub fn with_extension<'a>(&'a self, ext: &'a str) -> impl Iterator<Item = &'a PathBuf> {
        self.files.iter().filter(move |f| has_extension(f, ext))
    }
}

/// Where the audit inputs live.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub source_files: Vec<PathBuf>,
    pub resource_file: PathBuf,
    /// Directory entries that could not be accessed while walking.
    pub skipped_count: usize,
}

impl ProjectLayout {
    /// Resource path relative to the root, for display.
    pub fn resource_display(&self) -> String {
        self.resource_file
            .strip_prefix(&self.root)
            .unwrap_or(&self.resource_file)
            .display()
            .to_string()
    }
}

pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext.trim_start_matches('.')))
}

pub fn scan_files(root: &Path, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(PathBuf::from(p));
        }
    }

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| relative.starts_with(ignore_path))
        {
            continue;
        }

        let relative_str = relative.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&relative_str)) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

/// Confirm that `root` holds a project and find its sources and translation resource.
///
/// `resource_override` bypasses the name search; a relative override is
/// resolved against `root`.
pub fn locate(
    root: &Path,
    config: &Config,
    resource_override: Option<&Path>,
    verbose: bool,
) -> Result<ProjectLayout, AuditError> {
    let scan = scan_files(root, &config.ignores, verbose);

    if scan.with_extension(&config.project_marker).next().is_none() {
        return Err(AuditError::NoProjectDetected {
            marker: config.project_marker.trim_start_matches('.').to_string(),
            root: root.to_path_buf(),
        });
    }

    let source_files: Vec<PathBuf> = scan
        .files
        .iter()
        .filter(|f| {
            config
                .source_extensions
                .iter()
                .any(|ext| has_extension(f, ext))
        })
        .cloned()
        .collect();

    let resource_file = match resource_override {
        Some(path) => {
            let path = root.join(path);
            if !path.is_file() {
                return Err(AuditError::ResourceNotFound { path });
            }
            path
        }
        None => find_resource_file(&scan.files, &config.resource_file_names).ok_or_else(
            || AuditError::NoResourceFile {
                names: config.resource_file_names.clone(),
            },
        )?,
    };

    Ok(ProjectLayout {
        root: root.to_path_buf(),
        source_files,
        resource_file,
        skipped_count: scan.skipped_count,
    })
}

/// First file matching a resource name; earlier names take priority.
fn find_resource_file(files: &[PathBuf], names: &[String]) -> Option<PathBuf> {
    names.iter().find_map(|name| {
        files
            .iter()
            .find(|f| f.file_name().is_some_and(|n| n == name.as_str()))
            .cloned()
    })
}
