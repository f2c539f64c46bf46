use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::{ResourceReader, read_resource};
use crate::core::keys::KeySet;

/// Reader for JSON resources shaped as `{ "<key>": { "<locale>": "<text>" } }`.
///
/// Only top-level keys matter; locale values are not inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuredReader;

impl StructuredReader {
    pub fn parse_keys(&self, content: &str) -> Result<KeySet> {
        let json: Value = serde_json::from_str(content).context("Failed to parse JSON")?;

        let Value::Object(map) = json else {
            bail!("Expected a JSON object at the top level");
        };

        Ok(map.keys().cloned().collect())
    }
}

impl ResourceReader for StructuredReader {
    fn load(&self, path: &Path) -> Result<KeySet> {
        let content = read_resource(path)?;
        self.parse_keys(&content)
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}
