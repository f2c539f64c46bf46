use std::path::Path;

use anyhow::Result;

use super::{ResourceReader, read_resource};
use crate::core::keys::KeySet;

/// Reader for delimited text resources: one header row, key in the first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabularReader {
    separator: char,
}

impl TabularReader {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    pub fn parse_keys(&self, content: &str) -> KeySet {
        content
            .lines()
            .skip(1) // header
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                parse_delimited_line(line, self.separator)
                    .into_iter()
                    .next()
            })
            .map(|first| first.trim_matches('"').to_string())
            .filter(|key| !key.is_empty())
            .collect()
    }
}

impl Default for TabularReader {
    fn default() -> Self {
        Self::new(',')
    }
}

impl ResourceReader for TabularReader {
    fn load(&self, path: &Path) -> Result<KeySet> {
        let content = read_resource(path)?;
        Ok(self.parse_keys(&content))
    }

    fn format_name(&self) -> &'static str {
        if self.separator == '\t' { "tsv" } else { "csv" }
    }
}

/// Split one line into fields.
///
/// A `"` toggles quoted mode and is dropped from the output; a separator inside
/// quotes is literal. There is no escape for a quote inside a field.
pub fn parse_delimited_line(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            continue;
        }
        if c == separator && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);

    fields
}
