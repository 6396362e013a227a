//! Locale selection and string-leaf flattening over a positioned JSON tree.
//!
//! The JSON text is checked with `serde_json` first so that anything that is
//! not strict JSON, or nested deeper than its recursion limit, fails fast.
//! It is then parsed again with `jsonc-parser` to get a syntax tree that keeps
//! the byte range of every value.

use std::collections::HashSet;

use jsonc_parser::ast::{ObjectPropName, Value};
use jsonc_parser::{CollectOptions, ParseOptions};
use tracing::debug;
use yakulint_ast::{Position, Span};

use crate::ParseError;
use crate::location::{line_column_to_offset, position_to_line_column};

/// Set of locale keys to keep from a locale file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleFilter {
    locales: HashSet<String>,
}

impl LocaleFilter {
    /// Creates a filter that keeps exactly the given locale keys.
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locales: locales.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `key` is one of the selected locales.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.locales.contains(key)
    }

    /// Returns the number of selected locales.
    #[inline]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Returns true if no locale is selected, in which case nothing matches.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LocaleFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A top-level member of a locale file.
#[derive(Debug)]
pub struct LocaleEntry<'t> {
    /// Decoded member key, usually a locale code.
    pub key: String,
    /// The member value, with ranges relative to the parsed text.
    pub value: Value<'t>,
}

/// A string-typed JSON value with its position in the parsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafLiteral<'t> {
    /// The literal exactly as written, including quotes and escape sequences.
    pub raw: &'t str,
    /// The decoded string value.
    pub value: String,
    /// Byte span relative to the text that was parsed.
    pub span: Span,
}

/// Parses `json_text` and returns the top-level members kept by `locales`.
///
/// With no filter every member is returned. Members stay in source order.
///
/// # Errors
///
/// - [`ParseError::InvalidJson`] if `json_text` is not strict JSON.
/// - [`ParseError::NotAnObject`] if the top-level value is an array or a scalar.
pub fn pick_locales<'t>(
    json_text: &'t str,
    locales: Option<&LocaleFilter>,
) -> Result<Vec<LocaleEntry<'t>>, ParseError> {
    serde_json::from_str::<serde_json::Value>(json_text)
        .map_err(|e| serde_error(json_text, &e))?;

    let parsed = jsonc_parser::parse_to_ast(
        json_text,
        &CollectOptions::default(),
        &ParseOptions::default(),
    )
    .map_err(|e| {
        ParseError::invalid_json(
            e.kind().to_string(),
            position_to_line_column(json_text, e.range().start),
        )
    })?;

    let object = match parsed.value {
        Some(Value::Object(object)) => object,
        Some(Value::Array(_)) => return Err(ParseError::not_an_object("an array")),
        Some(Value::StringLit(_)) => return Err(ParseError::not_an_object("a string")),
        Some(_) => return Err(ParseError::not_an_object("a scalar")),
        None => return Err(ParseError::not_an_object("nothing")),
    };

    let total = object.properties.len();
    let entries: Vec<LocaleEntry<'t>> = object
        .properties
        .into_iter()
        .map(|prop| LocaleEntry {
            key: match &prop.name {
                ObjectPropName::String(s) => s.value.to_string(),
                ObjectPropName::Word(w) => w.value.to_string(),
            },
            value: prop.value,
        })
        .filter(|entry| locales.is_none_or(|filter| filter.contains(&entry.key)))
        .collect();

    debug!("Picked {} of {} locale entries", entries.len(), total);
    Ok(entries)
}

/// Converts a `serde_json` error into a [`ParseError::InvalidJson`] at a
/// character column of `text`.
fn serde_error(text: &str, error: &serde_json::Error) -> ParseError {
    // serde_json columns count bytes and point just past the offending byte
    let line_start = line_column_to_offset(text, Position::new(error.line() as u32, 0))
        .unwrap_or(text.len());
    let line_end = text[line_start..]
        .find('\n')
        .map_or(text.len(), |idx| line_start + idx);
    let offset = (line_start + error.column().saturating_sub(1)).min(line_end);

    let message = error.to_string();
    let message = match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message,
    };
    ParseError::invalid_json(message, position_to_line_column(text, offset))
}

/// Flattens `value` into the string literals it contains.
///
/// Objects are visited in member order and arrays in index order. Numbers,
/// booleans and null are skipped. `text` must be the text `value` was parsed
/// from.
pub fn flatten_string_leaves<'t>(value: &Value<'t>, text: &'t str) -> Vec<LeafLiteral<'t>> {
    let mut leaves = Vec::new();
    collect_leaves(value, text, &mut leaves);
    leaves
}

fn collect_leaves<'t>(value: &Value<'t>, text: &'t str, leaves: &mut Vec<LeafLiteral<'t>>) {
    match value {
        Value::Object(object) => {
            for prop in &object.properties {
                collect_leaves(&prop.value, text, leaves);
            }
        }
        Value::Array(array) => {
            for element in &array.elements {
                collect_leaves(element, text, leaves);
            }
        }
        Value::StringLit(lit) => {
            let (start, end) = (lit.range.start, lit.range.end);
            leaves.push(LeafLiteral {
                raw: &text[start..end],
                value: lit.value.to_string(),
                span: Span::new(start as u32, end as u32),
            });
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn leaves_of<'t>(text: &'t str, locales: Option<&LocaleFilter>) -> Vec<LeafLiteral<'t>> {
        pick_locales(text, locales)
            .unwrap()
            .iter()
            .flat_map(|entry| flatten_string_leaves(&entry.value, text))
            .collect()
    }

    fn values(leaves: &[LeafLiteral<'_>]) -> Vec<String> {
        leaves.iter().map(|leaf| leaf.value.clone()).collect()
    }

    #[test]
    fn skips_non_string_leaves_in_declared_order() {
        let text = r#"{"en": {"a": 1, "b": "x", "c": "y"}}"#;
        let leaves = leaves_of(text, None);

        assert_eq!(values(&leaves), vec!["x", "y"]);
    }

    #[test]
    fn skips_booleans_and_null() {
        let text = r#"{"en": [true, null, 1.5, "kept", false]}"#;
        assert_eq!(values(&leaves_of(text, None)), vec!["kept"]);
    }

    #[test]
    fn flattens_arrays_then_nested_objects() {
        let text = r#"{"en":["TODO: this is TODO", {"nested":"value"}]}"#;
        let leaves = leaves_of(text, None);

        assert_eq!(values(&leaves), vec!["TODO: this is TODO", "value"]);
    }

    #[test]
    fn filters_by_locale_key() {
        let text = r#"{"en":{"greeting":"Hello"},"ja":{"greeting":"こんにちは"}}"#;
        let filter = LocaleFilter::new(["ja"]);

        assert_eq!(values(&leaves_of(text, Some(&filter))), vec!["こんにちは"]);
        assert_eq!(
            values(&leaves_of(text, None)),
            vec!["Hello", "こんにちは"]
        );
    }

    #[test]
    fn empty_filter_keeps_nothing() {
        let text = r#"{"en":{"greeting":"Hello"}}"#;
        let filter = LocaleFilter::default();

        assert!(filter.is_empty());
        assert!(pick_locales(text, Some(&filter)).unwrap().is_empty());
    }

    #[test]
    fn entries_keep_source_order_and_keys() {
        let text = r#"{"todo": {}, "en": {}, "ja": {}}"#;
        let keys: Vec<String> = pick_locales(text, None)
            .unwrap()
            .into_iter()
            .map(|entry| entry.key)
            .collect();

        assert_eq!(keys, vec!["todo", "en", "ja"]);
    }

    #[test]
    fn leaf_spans_are_relative_to_the_parsed_text() {
        let text = "{\n  \"ja\": {\"morning\": \"朝\"}\n}";
        let leaves = leaves_of(text, None);

        assert_eq!(leaves.len(), 1);
        let leaf = &leaves[0];
        assert_eq!(leaf.raw, "\"朝\"");
        assert_eq!(leaf.span.slice(text), Some("\"朝\""));
        assert_eq!(leaf.span.len(), 5);
    }

    #[test]
    fn raw_keeps_escape_sequences() {
        let text = r#"{"en": {"quote": "say \"hi\"\n", "unicode": "\u0041"}}"#;
        let leaves = leaves_of(text, None);

        assert_eq!(leaves[0].raw, r#""say \"hi\"\n""#);
        assert_eq!(leaves[0].value, "say \"hi\"\n");
        assert_eq!(leaves[1].raw, r#""\u0041""#);
        assert_eq!(leaves[1].value, "A");
    }

    #[rstest]
    #[case(r#"["en"]"#)]
    #[case(r#""en""#)]
    #[case("42")]
    #[case("null")]
    fn rejects_non_object_top_level(#[case] text: &str) {
        let err = pick_locales(text, None).unwrap_err();
        assert!(matches!(err, ParseError::NotAnObject { .. }), "{err:?}");
    }

    #[rstest]
    #[case("")]
    #[case(r#"{"en": "#)]
    #[case(r#"{"en": "x",}"#)]
    #[case(r#"{en: "x"}"#)]
    #[case("{\"en\": \"x\" // comment\n}")]
    fn rejects_malformed_json(#[case] text: &str) {
        let err = pick_locales(text, None).unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson { .. }), "{err:?}");
    }

    #[test]
    fn invalid_json_reports_position() {
        let err = pick_locales("{\n  \"en\": ,\n}", None).unwrap_err();
        match err {
            ParseError::InvalidJson {
                message,
                line,
                column,
            } => {
                assert_eq!((line, column), (2, 8));
                assert_eq!(message, "expected value");
            }
            other => panic!("Expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_column_counts_characters() {
        let err = pick_locales("{\"ja\": \"朝\" ,}", None).unwrap_err();
        match err {
            ParseError::InvalidJson { line, column, .. } => {
                assert_eq!(line, 1);
                assert_eq!(column, 12);
            }
            other => panic!("Expected InvalidJson, got {other:?}"),
        }
    }

    fn nested_arrays(depth: usize) -> String {
        format!(
            "{{\"en\": {}\"x\"{}}}",
            "[".repeat(depth),
            "]".repeat(depth)
        )
    }

    #[test]
    fn accepts_moderate_nesting() {
        let text = nested_arrays(100);
        assert_eq!(values(&leaves_of(&text, None)), vec!["x"]);
    }

    #[rstest]
    #[case(200)]
    #[case(2_000)]
    #[case(30_000)]
    fn rejects_deep_nesting(#[case] depth: usize) {
        let err = pick_locales(&nested_arrays(depth), None).unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson { .. }), "{err:?}");
    }

    #[test]
    fn lone_surrogate_is_invalid_json() {
        let err = pick_locales(r#"{"en": {"a": "\ud800"}}"#, None).unwrap_err();
        match err {
            ParseError::InvalidJson { line, column, .. } => {
                assert_eq!(line, 1);
                assert!(column >= 13, "column {column}");
            }
            other => panic!("Expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn locale_filter_from_iterator() {
        let filter: LocaleFilter = vec!["en".to_string(), "ja".to_string()].into_iter().collect();
        assert_eq!(filter.len(), 2);
        assert!(filter.contains("ja"));
        assert!(!filter.contains("fr"));
    }
}
