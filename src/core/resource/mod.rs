//! Translation resource readers.
//!
//! A resource is either a delimited table whose first column holds the keys
//! (`translations.csv`) or a JSON document whose top-level object keys are the
//! translation keys (`translations.json`).
//!
//! ## Module Structure
//!
//! - `tabular`: delimited text reader with quote-aware field splitting
//! - `structured`: JSON reader

pub mod structured;
pub mod tabular;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use enum_dispatch::enum_dispatch;

use crate::core::keys::KeySet;
pub use structured::StructuredReader;
pub use tabular::{TabularReader, parse_delimited_line};

/// Loads the set of available keys from a resource file.
#[enum_dispatch]
pub trait ResourceReader {
    fn load(&self, path: &Path) -> Result<KeySet>;

    /// Short name of the format, for diagnostics.
    fn format_name(&self) -> &'static str;
}

#[enum_dispatch(ResourceReader)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceFormat {
    Tabular(TabularReader),
    Structured(StructuredReader),
}

impl ResourceFormat {
    /// Pick a reader by file extension, falling back to sniffing the content.
    pub fn detect(path: &Path) -> ResourceFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StructuredReader.into(),
            Some(ext) if ext.eq_ignore_ascii_case("csv") => TabularReader::new(',').into(),
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => TabularReader::new('\t').into(),
            _ => Self::sniff(path),
        }
    }

    fn sniff(path: &Path) -> ResourceFormat {
        let looks_structured = read_resource(path)
            .map(|content| content.trim_start().starts_with('{'))
            .unwrap_or(false);

        if looks_structured {
            StructuredReader.into()
        } else {
            TabularReader::new(',').into()
        }
    }
}

/// Read a resource file as text, dropping a leading UTF-8 byte order mark.
///
/// .NET tooling writes the BOM by default and neither JSON parsing nor
/// `trim_start` treats U+FEFF as whitespace.
pub fn read_resource(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Result of loading the translation resource.
///
/// Loading never aborts the audit: on failure `keys` is empty and `warning`
/// carries the reason.
#[derive(Debug, Default)]
pub struct ResourceOutcome {
    pub keys: KeySet,
    /// Format the resource was read as (`csv`, `tsv` or `json`).
    pub format: &'static str,
    pub warning: Option<String>,
}

pub fn load_available_keys(path: &Path) -> ResourceOutcome {
    let reader = ResourceFormat::detect(path);
    match reader
        .load(path)
        .with_context(|| format!("Could not load {}", display_name(path)))
    {
        Ok(keys) => ResourceOutcome {
            keys,
            format: reader.format_name(),
            warning: None,
        },
        Err(e) => ResourceOutcome {
            keys: KeySet::new(),
            format: reader.format_name(),
            warning: Some(format!("{:#}", e)),
        },
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
