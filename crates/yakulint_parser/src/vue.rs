//! Vue single-file component parser.
//!
//! Extracts the strings of the component's `<i18n>` custom block. Ranges and
//! locations in the result refer to the whole `.vue` file.

use tracing::debug;
use yakulint_ast::{AstArena, TxtNode};

use crate::document::{SourceKind, assemble_document, empty_document};
use crate::json::LocaleFilter;
use crate::sfc::find_i18n_block;
use crate::{ParseError, Parser};

/// Parser for the `<i18n>` block of Vue single-file components.
#[derive(Debug, Clone, Default)]
pub struct VueI18nParser {
    locales: Option<LocaleFilter>,
}

impl VueI18nParser {
    /// Creates a parser that extracts every locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that extracts only `locales`.
    pub fn with_locales(locales: LocaleFilter) -> Self {
        Self {
            locales: Some(locales),
        }
    }

    /// Returns the locale filter, if any.
    pub fn locales(&self) -> Option<&LocaleFilter> {
        self.locales.as_ref()
    }
}

impl Parser for VueI18nParser {
    fn name(&self) -> &str {
        "vue-i18n"
    }

    fn extensions(&self) -> &[&str] {
        &["vue"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError> {
        let source = arena.alloc_str(source);

        let Some(block) = find_i18n_block(source) else {
            debug!("No <i18n> block found");
            return Ok(empty_document());
        };

        debug!(
            "Found <i18n> block at {}..{} ({} bytes)",
            block.start,
            block.end,
            block.content.len()
        );
        assemble_document(
            arena,
            source,
            &SourceKind::ComponentBlock(block),
            self.locales.as_ref(),
        )
    }
}
