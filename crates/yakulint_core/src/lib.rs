//! # yakulint_core
//!
//! Processors that turn locale files into TxtAST for textlint-style rules.
//!
//! This crate provides:
//! - `PluginOptions` loading
//! - Resource pattern matching
//! - `JsonProcessor` and `VueI18nProcessor`
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//!
//! use yakulint_ast::AstArena;
//! use yakulint_core::{PluginOptions, Processor, VueI18nProcessor};
//!
//! let options = PluginOptions::from_json(r#"{"locales": ["ja"]}"#).unwrap();
//! let processor = VueI18nProcessor::new(&options).unwrap();
//!
//! let arena = AstArena::new();
//! let text = r#"<i18n>{"en": {"hi": "Hi"}, "ja": {"hi": "やあ"}}</i18n>"#;
//! let ast = processor.pre_process(&arena, text, Some(Path::new("Hello.vue"))).unwrap();
//! assert_eq!(ast.children.len(), 1);
//! ```

mod config;
mod error;
mod processor;
mod resource;

pub use config::PluginOptions;
pub use error::ProcessorError;
pub use processor::{JsonProcessor, PostProcessed, Processor, TEXT_FILE_PATH, VueI18nProcessor};
pub use resource::ResourceMatcher;
