//! Set arithmetic between used and available keys.

use crate::core::keys::KeySet;

/// Exit codes are a single byte on most platforms; larger counts are clamped
/// so that they can never wrap around to 0.
pub const MAX_EXIT_CODE: u8 = u8::MAX;

/// Coverage of the used keys by the translation resource.
///
/// `covered` and `missing` follow the order of the used keys, `unused`
/// follows the order of the available keys.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub used_count: usize,
    pub available_count: usize,
    pub covered: Vec<String>,
    pub missing: Vec<String>,
    pub unused: Vec<String>,
}

impl CoverageReport {
    pub fn compute(used: &KeySet, available: &KeySet) -> Self {
        let (covered, missing): (Vec<String>, Vec<String>) = used
            .iter()
            .map(str::to_string)
            .partition(|key| available.contains(key));

        let unused = available
            .iter()
            .filter(|key| !used.contains(key))
            .map(str::to_string)
            .collect();

        Self {
            used_count: used.len(),
            available_count: available.len(),
            covered,
            missing,
            unused,
        }
    }

    /// Share of used keys that are available, in percent.
    ///
    /// With no used keys nothing can be missing, so this is 100.
    pub fn coverage_percent(&self) -> f64 {
        match self.expected() {
            0 => 100.0,
            total => self.covered.len() as f64 / total as f64 * 100.0,
        }
    }

    /// Share of used keys that are missing, in percent. 0 with no used keys.
    pub fn missing_percent(&self) -> f64 {
        match self.expected() {
            0 => 0.0,
            total => self.missing.len() as f64 / total as f64 * 100.0,
        }
    }

    /// Process exit code: the number of missing keys, clamped to a byte.
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.missing.len()).unwrap_or(MAX_EXIT_CODE)
    }

    fn expected(&self) -> usize {
        self.covered.len() + self.missing.len()
    }
}
