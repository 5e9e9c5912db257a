//! Markup snippets: `<tag name="value"></tag>`.
//!
//! Only what example snippets use is understood: one opening tag, quoted or
//! bare attribute values, valueless attributes, and an optional closing tag
//! or `/>`. Anything after the opening tag is ignored.

use crate::error::{GalleryError, Result};

/// Tag and attributes of one element, attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

/// Parse the first element of `snippet`.
pub fn parse(snippet: &str) -> Result<Markup> {
    let malformed = |reason| GalleryError::MalformedMarkup {
        snippet: snippet.to_string(),
        reason,
    };

    let mut cur = Cursor::new(snippet.trim());
    if !cur.eat('<') {
        return Err(malformed("expected `<`"));
    }

    let tag = cur.take_while(is_name_char).to_ascii_lowercase();
    if tag.is_empty() {
        return Err(malformed("missing tag name"));
    }

    let mut attributes: Vec<(String, String)> = Vec::new();
    loop {
        cur.skip_whitespace();
        match cur.peek() {
            None => return Err(malformed("unterminated tag")),
            Some('>') => break,
            Some('/') => {
                cur.bump();
                if !cur.eat('>') {
                    return Err(malformed("expected `>` after `/`"));
                }
                break;
            }
            Some(c) if is_name_char(c) => {
                let name = cur.take_while(is_name_char).to_ascii_lowercase();
                cur.skip_whitespace();
                let value = if cur.eat('=') {
                    cur.skip_whitespace();
                    match cur.peek() {
                        Some(q @ ('"' | '\'')) => {
                            cur.bump();
                            let raw = cur.take_while(|c| c != q);
                            if !cur.eat(q) {
                                return Err(malformed("unterminated attribute value"));
                            }
                            unescape(raw)
                        }
                        Some(_) => unescape(cur.take_while(|c| !c.is_whitespace() && c != '>' && c != '/')),
                        None => return Err(malformed("missing attribute value")),
                    }
                } else {
                    String::new()
                };
                // First occurrence wins, as in HTML
                if !attributes.iter().any(|(n, _)| *n == name) {
                    attributes.push((name, value));
                }
            }
            Some(_) => return Err(malformed("unexpected character in tag")),
        }
    }

    Ok(Markup { tag, attributes })
}

/// Render `<tag a="v" ...></tag>`.
pub fn render<'a, I>(tag: &str, attributes: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = format!("<{tag}");
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out.push_str(&format!("></{tag}>"));
    out
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

fn escape(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn unescape(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

// =============================================================================
// Cursor
// =============================================================================

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
        &self.src[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }
}
