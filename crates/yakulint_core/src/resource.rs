//! Resource pattern matching.

use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::ProcessorError;

/// Matches file paths against the configured resource globs.
///
/// A path matches if any pattern matches it. `*` does not cross `/`; use `**`
/// to match across directories.
#[derive(Debug, Clone, Default)]
pub struct ResourceMatcher {
    globs: Option<GlobSet>,
}

impl ResourceMatcher {
    /// Compiles `patterns` into a matcher.
    pub fn new(patterns: &[String]) -> Result<Self, ProcessorError> {
        if patterns.is_empty() {
            return Ok(Self::default());
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| ProcessorError::config(format!("Invalid glob pattern: {}", e)))?;
            builder.add(glob);
        }

        let globs = builder
            .build()
            .map_err(|e| ProcessorError::config(format!("Failed to build globset: {}", e)))?;

        Ok(Self { globs: Some(globs) })
    }

    /// Returns true if `path` matches a resource pattern.
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        self.globs
            .as_ref()
            .is_some_and(|globs| globs.is_match(path.as_ref()))
    }

    /// Returns true if no pattern is configured.
    pub fn is_empty(&self) -> bool {
        self.globs.as_ref().is_none_or(GlobSet::is_empty)
    }
}
