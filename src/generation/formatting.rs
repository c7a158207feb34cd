//! Stateless text helpers exposed to templates
//!
//! The functions here are pure; `infrastructure::generation::register_filters`
//! wires them into a tera instance for one target language.

use crate::generation::utils;

/// Prefix every line of `text` with `width` spaces
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let ends_with_newline = text.ends_with('\n');
    let body = text.strip_suffix('\n').unwrap_or(text);

    let mut out = body
        .split('\n')
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n");
    if ends_with_newline {
        out.push('\n');
    }
    out
}

pub fn lowercase_first(text: &str) -> String {
    utils::lowercase_first(text)
}

pub fn titlecase(text: &str) -> String {
    utils::titlecase_first(text)
}

/// Turn HTML entities and backslash escapes back into the characters they stand for
///
/// # Examples
/// ```
/// use housestyle::generation::formatting::unescape;
///
/// assert_eq!(unescape("&quot;a&quot;\\nb"), "\"a\"\nb");
/// ```
pub fn unescape(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    let mut out = String::with_capacity(decoded.len());
    let mut chars = decoded.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(c @ ('"' | '\'' | '\\' | '/')) => out.push(c),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Continue a doc comment across the line breaks of `text`
///
/// `\r\n` counts as one break.
pub fn multiline_comment(text: &str, continuation: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        out.push(ch);
        match ch {
            '\r' if chars.peek() == Some(&'\n') => {
                out.push('\n');
                chars.next();
                out.push_str(continuation);
            }
            '\r' | '\n' => out.push_str(continuation),
            _ => {}
        }
    }
    out
}
