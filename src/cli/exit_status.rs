use std::process::ExitCode;

use crate::core::CoverageReport;

/// Exit status for CLI commands.
///
/// - `Success` (0): every used key is defined
/// - `MissingKeys(n)` (n): n keys are used but not defined, clamped to 255
/// - `Error` (1): the audit could not run (no project, no translation file, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    MissingKeys(u8),
    Error,
}

impl ExitStatus {
    pub fn from_report(report: &CoverageReport) -> Self {
        match report.exit_code() {
            0 => ExitStatus::Success,
            n => ExitStatus::MissingKeys(n),
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::MissingKeys(n) => ExitCode::from(n),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
