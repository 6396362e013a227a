//! textlint-style processors for locale files.
//!
//! A processor claims a set of file extensions, turns the file text into a
//! TxtAST in `pre_process`, and maps lint messages back in `post_process`.

use std::path::Path;

use tracing::{debug, info};
use yakulint_ast::{AstArena, TxtNode};
use yakulint_parser::{JsonParser, Parser, VueI18nParser};

use crate::{PluginOptions, ProcessorError, ResourceMatcher};

/// File path reported for text that did not come from a file.
pub const TEXT_FILE_PATH: &str = "<text>";

/// Result of [`Processor::post_process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostProcessed<M> {
    pub messages: Vec<M>,
    pub file_path: String,
}

/// A textlint processor.
pub trait Processor {
    /// Returns the extensions this processor claims, with the leading dot.
    fn available_extensions(&self) -> &[&str];

    /// Parses `text` into a TxtAST document.
    fn pre_process<'a>(
        &self,
        arena: &'a AstArena,
        text: &str,
        file_path: Option<&Path>,
    ) -> Result<TxtNode<'a>, ProcessorError>;

    /// Returns `messages` unchanged together with the reported file path.
    fn post_process<M>(&self, messages: Vec<M>, file_path: Option<&Path>) -> PostProcessed<M>
    where
        Self: Sized,
    {
        PostProcessed {
            messages,
            file_path: display_path(file_path),
        }
    }
}

fn display_path(file_path: Option<&Path>) -> String {
    file_path.map_or_else(
        || TEXT_FILE_PATH.to_string(),
        |path| path.display().to_string(),
    )
}

/// Processor for standalone JSON locale files.
#[derive(Debug, Clone, Default)]
pub struct JsonProcessor {
    parser: JsonParser,
}

impl JsonProcessor {
    /// Creates a JSON processor.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Processor for JsonProcessor {
    fn available_extensions(&self) -> &[&str] {
        &[".json"]
    }

    fn pre_process<'a>(
        &self,
        arena: &'a AstArena,
        text: &str,
        _file_path: Option<&Path>,
    ) -> Result<TxtNode<'a>, ProcessorError> {
        Ok(self.parser.parse(arena, text)?)
    }
}

/// Processor for Vue single-file components and their JSON resources.
///
/// Files matching a configured resource pattern are read as plain JSON
/// locale files; everything else is searched for an `<i18n>` block.
#[derive(Debug, Clone)]
pub struct VueI18nProcessor {
    vue: VueI18nParser,
    json: JsonParser,
    resources: ResourceMatcher,
}

impl VueI18nProcessor {
    /// Creates a processor from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessorError::Config`] if a resource pattern is not a valid glob.
    pub fn new(options: &PluginOptions) -> Result<Self, ProcessorError> {
        let vue = match options.locale_filter() {
            Some(filter) => VueI18nParser::with_locales(filter),
            None => VueI18nParser::new(),
        };

        Ok(Self {
            vue,
            json: JsonParser::new(),
            resources: ResourceMatcher::new(&options.resources)?,
        })
    }

    /// Returns true if `file_path` is read as a plain JSON resource.
    pub fn is_resource(&self, file_path: &Path) -> bool {
        self.resources.is_match(file_path)
    }
}

impl Processor for VueI18nProcessor {
    fn available_extensions(&self) -> &[&str] {
        &[".vue", ".json"]
    }

    fn pre_process<'a>(
        &self,
        arena: &'a AstArena,
        text: &str,
        file_path: Option<&Path>,
    ) -> Result<TxtNode<'a>, ProcessorError> {
        if let Some(path) = file_path
            && self.is_resource(path)
        {
            info!("Reading {} as a JSON locale resource", path.display());
            return Ok(self.json.parse(arena, text)?);
        }

        debug!("Searching {} for an <i18n> block", display_path(file_path));
        Ok(self.vue.parse(arena, text)?)
    }
}
