//! Fatal audit failures.
//!
//! Recoverable problems (an unreadable source file, a malformed translation
//! resource) are carried as warnings in the audit outcome instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    /// No file with the project-marker extension exists under the root.
    #[error("No project could be detected (no *.{marker} file under {})", .root.display())]
    NoProjectDetected { marker: String, root: PathBuf },

    #[error("No translation file found (looked for {})", .names.join(", "))]
    NoResourceFile { names: Vec<String> },

    #[error("Translation file does not exist: {}", .path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("Invalid extraction pattern \"{pattern}\"")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Capture group {group} does not exist in pattern \"{pattern}\"")]
    InvalidGroup { pattern: String, group: usize },

    /// Raised only in strict mode, when at least one source file was unreadable.
    #[error("{count} source file(s) could not be read")]
    SourceRead { count: usize },
}
