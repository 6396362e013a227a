//! Processor options.

use std::fs;
use std::path::Path;

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};
use yakulint_parser::LocaleFilter;

use crate::ProcessorError;

/// Options shared by the locale processors.
///
/// ```json
/// {
///   // Only lint these locales
///   "locales": ["ja"],
///   // Treat matching files as plain JSON locale resources
///   "resources": ["locales/**/*.json"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginOptions {
    /// Locale keys to extract. `None` extracts every locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales: Option<Vec<String>>,

    /// Glob patterns of files handled as plain JSON locale resources.
    pub resources: Vec<String>,
}

impl PluginOptions {
    /// Creates options that extract every locale and match no resources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from a JSON file. Comments and trailing commas are allowed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProcessorError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ProcessorError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Parses options from a JSON string.
    ///
    /// An empty document yields the default options.
    pub fn from_json(json: &str) -> Result<Self, ProcessorError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| ProcessorError::config(format!("Invalid JSON: {}", e)))?;

        match value {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| ProcessorError::config(format!("Invalid options: {}", e))),
            None => Ok(Self::default()),
        }
    }

    /// Returns the locale filter these options describe.
    pub fn locale_filter(&self) -> Option<LocaleFilter> {
        self.locales
            .as_ref()
            .map(|locales| LocaleFilter::new(locales.iter().cloned()))
    }
}
