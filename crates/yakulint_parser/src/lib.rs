//! # yakulint_parser
//!
//! Parsers that lift localized strings into TxtAST.
//!
//! This crate provides:
//! - A `Parser` trait shared by every source format
//! - `JsonParser` for standalone JSON locale files
//! - `VueI18nParser` for the `<i18n>` custom block of Vue single-file components
//! - The coordinate helpers both parsers are built on
//!
//! ## Architecture
//!
//! Every extracted string literal has a position in the text that was parsed
//! to find it (the whole file, or the content of an `<i18n>` block) and a
//! position in the original file. An [`Anchor`] records where the parsed
//! region starts in the original file, and each literal is lifted exactly
//! once by composing its relative position with that anchor.
//!
//! ## Example
//!
//! ```rust
//! use yakulint_ast::AstArena;
//! use yakulint_parser::{JsonParser, Parser};
//!
//! let arena = AstArena::new();
//! let parser = JsonParser::new();
//! let source = r#"{"ja": {"morning": "朝"}}"#;
//!
//! let ast = parser.parse(&arena, source).unwrap();
//! assert_eq!(ast.children.len(), 1);
//! assert_eq!(ast.children[0].children[0].value, Some("朝"));
//! ```

mod document;
mod error;
pub mod json;
mod json_parser;
pub mod lift;
pub mod location;
pub mod sfc;
mod traits;
mod vue;

pub use document::{SourceKind, assemble_document, empty_document};
pub use error::ParseError;
pub use json::{LeafLiteral, LocaleEntry, LocaleFilter, flatten_string_leaves, pick_locales};
pub use json_parser::JsonParser;
pub use lift::{Anchor, lift_literal, lift_literal_absolute};
pub use location::{line_column_to_offset, position_to_line_column, range_to_line_column};
pub use sfc::{SfcBlock, find_i18n_block};
pub use traits::Parser;
pub use vue::VueI18nParser;
