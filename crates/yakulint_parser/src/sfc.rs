//! Top-level block scanner for Vue single-file components.
//!
//! Only the outermost tags of a component are recognized. Their content is
//! kept as a verbatim slice of the source, so `&source[block.start..block.end]`
//! is always `block.content`.

use tracing::warn;

/// An attribute on a top-level block's opening tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SfcAttribute<'s> {
    pub name: &'s str,
    /// `None` for a bare attribute such as `<style scoped>`.
    pub value: Option<&'s str>,
}

/// A top-level block of a single-file component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfcBlock<'s> {
    /// Tag name as written.
    pub name: &'s str,
    pub attrs: Vec<SfcAttribute<'s>>,
    /// Text between the opening and closing tags.
    pub content: &'s str,
    /// Byte offset of the first content byte.
    pub start: usize,
    /// Byte offset one past the last content byte.
    pub end: usize,
}

impl<'s> SfcBlock<'s> {
    /// Returns the value of attribute `name`, if present with a value.
    pub fn attr(&self, name: &str) -> Option<&'s str> {
        self.attrs
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .and_then(|attr| attr.value)
    }

    /// Returns the `lang` attribute.
    #[inline]
    pub fn lang(&self) -> Option<&'s str> {
        self.attr("lang")
    }

    /// Returns true if this is an `<i18n>` block.
    #[inline]
    pub fn is_i18n(&self) -> bool {
        self.name.eq_ignore_ascii_case("i18n")
    }
}

/// Returns the first `<i18n>` block of `source`.
///
/// Later `<i18n>` blocks are ignored with a warning.
pub fn find_i18n_block(source: &str) -> Option<SfcBlock<'_>> {
    let mut blocks = parse_blocks(source).into_iter().filter(SfcBlock::is_i18n);
    let first = blocks.next()?;

    let ignored = blocks.count();
    if ignored > 0 {
        warn!("Found {} extra <i18n> blocks; only the first is used", ignored);
    }
    if let Some(lang) = first.lang()
        && !lang.eq_ignore_ascii_case("json")
    {
        warn!("<i18n lang=\"{}\"> is read as JSON", lang);
    }

    Some(first)
}

/// Scans `source` for its top-level blocks, in source order.
///
/// Comments, doctype and processing instructions between blocks are skipped.
/// A block without a closing tag runs to the end of the source.
pub fn parse_blocks(source: &str) -> Vec<SfcBlock<'_>> {
    let bytes = source.as_bytes();
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(rel) = source[pos..].find('<') {
        let tag_start = pos + rel;
        let rest = &source[tag_start..];

        if rest.starts_with("<!--") {
            pos = skip_comment(source, tag_start);
            continue;
        }
        if rest.starts_with("</") || rest.starts_with("<!") || rest.starts_with("<?") {
            pos = source[tag_start..]
                .find('>')
                .map_or(source.len(), |idx| tag_start + idx + 1);
            continue;
        }

        let Some(open) = scan_open_tag(source, tag_start) else {
            pos = tag_start + 1;
            continue;
        };

        if open.self_closing {
            blocks.push(SfcBlock {
                name: open.name,
                attrs: open.attrs,
                content: "",
                start: open.end,
                end: open.end,
            });
            pos = open.end;
            continue;
        }

        let (content_end, next) = if open.name.eq_ignore_ascii_case("template") {
            find_nested_close(source, open.end, open.name)
        } else {
            find_close(bytes, open.end, open.name)
        };

        blocks.push(SfcBlock {
            name: open.name,
            attrs: open.attrs,
            content: &source[open.end..content_end],
            start: open.end,
            end: content_end,
        });
        pos = next;
    }

    blocks
}

struct OpenTag<'s> {
    name: &'s str,
    attrs: Vec<SfcAttribute<'s>>,
    /// Offset just past the closing `>`.
    end: usize,
    self_closing: bool,
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.')
}

fn skip_comment(source: &str, from: usize) -> usize {
    source[from + 4..]
        .find("-->")
        .map_or(source.len(), |idx| from + 4 + idx + 3)
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Parses the opening tag starting at `start` (which points at `<`).
fn scan_open_tag(source: &str, start: usize) -> Option<OpenTag<'_>> {
    let bytes = source.as_bytes();
    let name_start = start + 1;
    if !bytes.get(name_start)?.is_ascii_alphabetic() {
        return None;
    }

    let mut pos = name_start;
    while pos < bytes.len() && is_name_byte(bytes[pos]) {
        pos += 1;
    }
    let name = &source[name_start..pos];
    let mut attrs = Vec::new();

    loop {
        pos = skip_whitespace(bytes, pos);
        match *bytes.get(pos)? {
            b'>' => {
                return Some(OpenTag {
                    name,
                    attrs,
                    end: pos + 1,
                    self_closing: false,
                });
            }
            b'/' if bytes.get(pos + 1) == Some(&b'>') => {
                return Some(OpenTag {
                    name,
                    attrs,
                    end: pos + 2,
                    self_closing: true,
                });
            }
            _ => {}
        }

        let attr_start = pos;
        while pos < bytes.len()
            && !bytes[pos].is_ascii_whitespace()
            && !matches!(bytes[pos], b'=' | b'>' | b'/')
        {
            pos += 1;
        }
        if pos == attr_start {
            // Stray '/' inside the tag
            pos += 1;
            continue;
        }
        let attr_name = &source[attr_start..pos];

        let after_name = skip_whitespace(bytes, pos);
        if bytes.get(after_name) != Some(&b'=') {
            attrs.push(SfcAttribute {
                name: attr_name,
                value: None,
            });
            continue;
        }

        pos = skip_whitespace(bytes, after_name + 1);
        let value = match *bytes.get(pos)? {
            quote @ (b'"' | b'\'') => {
                let value_start = pos + 1;
                let len = bytes[value_start..].iter().position(|&b| b == quote)?;
                pos = value_start + len + 1;
                &source[value_start..value_start + len]
            }
            _ => {
                let value_start = pos;
                while pos < bytes.len()
                    && !bytes[pos].is_ascii_whitespace()
                    && bytes[pos] != b'>'
                {
                    pos += 1;
                }
                &source[value_start..pos]
            }
        };
        attrs.push(SfcAttribute {
            name: attr_name,
            value: Some(value),
        });
    }
}

/// Returns true if a closing tag for `name` starts at `pos`.
fn is_close_tag(bytes: &[u8], pos: usize, name: &str) -> bool {
    let name_start = pos + 2;
    let name_end = name_start + name.len();
    bytes.get(pos..name_start) == Some(&b"</"[..])
        && bytes
            .get(name_start..name_end)
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name.as_bytes()))
        && bytes
            .get(name_end)
            .is_none_or(|&b| b == b'>' || b.is_ascii_whitespace())
}

/// Offset just past the `>` of the closing tag at `pos`.
fn close_tag_end(bytes: &[u8], pos: usize) -> usize {
    bytes[pos..]
        .iter()
        .position(|&b| b == b'>')
        .map_or(bytes.len(), |idx| pos + idx + 1)
}

/// Finds the first closing tag for `name`, returning (content end, resume offset).
fn find_close(bytes: &[u8], from: usize, name: &str) -> (usize, usize) {
    (from..bytes.len())
        .find(|&pos| bytes[pos] == b'<' && is_close_tag(bytes, pos, name))
        .map_or((bytes.len(), bytes.len()), |pos| {
            (pos, close_tag_end(bytes, pos))
        })
}

/// Like [`find_close`], but counts nested tags of the same name.
fn find_nested_close(source: &str, from: usize, name: &str) -> (usize, usize) {
    let bytes = source.as_bytes();
    let mut depth = 1usize;
    let mut pos = from;

    while let Some(rel) = source[pos..].find('<') {
        let at = pos + rel;
        if source[at..].starts_with("<!--") {
            pos = skip_comment(source, at);
            continue;
        }
        if is_close_tag(bytes, at, name) {
            depth -= 1;
            if depth == 0 {
                return (at, close_tag_end(bytes, at));
            }
            pos = at + 2;
            continue;
        }
        if let Some(open) = scan_open_tag(source, at)
            && open.name.eq_ignore_ascii_case(name)
        {
            if !open.self_closing {
                depth += 1;
            }
            pos = open.end;
            continue;
        }
        pos = at + 1;
    }

    (source.len(), source.len())
}
