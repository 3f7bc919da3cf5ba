//! Configuration for loading and comparing tables

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Precision used when none is given: the largest absolute difference at
/// which two numbers still count as equal
pub const DEFAULT_PRECISION: f64 = 0.00001;

/// Options for parsing a delimited text table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadOptions {
    /// Treat the first record as column names
    pub header: bool,
    /// Field delimiter
    pub sep: char,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            header: true,
            sep: ',',
        }
    }
}

impl LoadOptions {
    /// Build options from a configuration map such as `{"header": false, "sep": ";"}`.
    /// Missing keys keep their defaults.
    pub fn from_map(map: serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let options: Self = serde_json::from_value(serde_json::Value::Object(map))
            .context("Invalid load options")?;
        options.delimiter()?;
        Ok(options)
    }

    /// Set whether the first record holds column names
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Set the field delimiter
    pub fn with_separator(mut self, sep: char) -> Self {
        self.sep = sep;
        self
    }

    /// Delimiter as a byte, as the CSV reader expects
    pub fn delimiter(&self) -> Result<u8> {
        if !self.sep.is_ascii() {
            bail!("Separator must be a single ASCII character, got {:?}", self.sep);
        }
        Ok(self.sep as u8)
    }
}
