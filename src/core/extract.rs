//! Key extraction from source files.
//!
//! Extraction is driven entirely by data: an ordered list of regexes, each
//! naming the capture group that holds the key literal.

use std::{
    fs,
    path::{Path, PathBuf},
};

use regex::{Captures, Regex};

use crate::{config::PatternConfig, core::keys::KeySet, errors::AuditError};

/// A compiled extraction rule.
#[derive(Debug, Clone)]
pub struct ExtractionPattern {
    regex: Regex,
    /// `None` takes the first capture group that participated in the match.
    group: Option<usize>,
}

impl ExtractionPattern {
    pub fn new(config: &PatternConfig) -> Result<Self, AuditError> {
        let regex = Regex::new(&config.regex).map_err(|source| AuditError::InvalidPattern {
            pattern: config.regex.clone(),
            source,
        })?;

        if let Some(group) = config.group {
            // captures_len() counts the implicit whole-match group 0
            if group >= regex.captures_len() {
                return Err(AuditError::InvalidGroup {
                    pattern: config.regex.clone(),
                    group,
                });
            }
        }

        Ok(Self {
            regex,
            group: config.group,
        })
    }

    fn key_from<'h>(&self, caps: &Captures<'h>) -> Option<&'h str> {
        match self.group {
            Some(index) => caps.get(index).map(|m| m.as_str()),
            None => caps.iter().skip(1).flatten().next().map(|m| m.as_str()),
        }
    }
}

/// A source file that could not be read.
#[derive(Debug, Clone)]
pub struct FileError {
    pub path: PathBuf,
    pub error: String,
}

/// Keys found across all scanned source files.
#[derive(Debug, Default)]
pub struct ExtractionOutcome {
    pub keys: KeySet,
    /// Number of files successfully read.
    pub files_scanned: usize,
    pub errors: Vec<FileError>,
}

#[derive(Debug, Clone, Default)]
pub struct KeyExtractor {
    patterns: Vec<ExtractionPattern>,
}

impl KeyExtractor {
    /// Compile the configured patterns.
    ///
    /// Empty regexes are accepted and skipped: they can only produce empty
    /// matches and never yield a key.
    pub fn from_config(patterns: &[PatternConfig]) -> Result<Self, AuditError> {
        let patterns = patterns
            .iter()
            .filter(|p| !p.regex.is_empty())
            .map(ExtractionPattern::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Extract every key occurrence from source text, in pattern order and
    /// then source order. Duplicates are kept; empty captures are dropped.
    pub fn extract_from_source(&self, source: &str) -> Vec<String> {
        let mut keys = Vec::new();
        for pattern in &self.patterns {
            for caps in pattern.regex.captures_iter(source) {
                match pattern.key_from(&caps) {
                    Some(key) if !key.is_empty() => keys.push(key.to_string()),
                    _ => {}
                }
            }
        }
        keys
    }

    /// Scan all files and collect the deduplicated set of used keys.
    ///
    /// Unreadable files (permissions, invalid UTF-8) are recorded in
    /// `errors` and skipped; the caller decides whether that is fatal.
    pub fn extract_used_keys<P: AsRef<Path>>(&self, files: &[P]) -> ExtractionOutcome {
        let mut outcome = ExtractionOutcome::default();

        for path in files {
            let path = path.as_ref();
            match fs::read_to_string(path) {
                Ok(content) => {
                    outcome.keys.extend(self.extract_from_source(&content));
                    outcome.files_scanned += 1;
                }
                Err(e) => outcome.errors.push(FileError {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                }),
            }
        }

        outcome
    }
}
