//! Locating locale blocks and named sections inside a translation table.
//!
//! The table is treated as plain text. A locale block is found with a regex over quoted
//! `'xx-XX': {` keys, a section key with a regex scoped to that block, and the end of a section
//! with a character scan that counts brace depth while skipping over quoted strings.

use crate::error::{Error, Result};
use crate::section::{LocaleBlock, SectionSpan};
use regex::Regex;
use tracing::debug;

/// Quoted locale keys, plus the `};` line that closes the exported table.
const LOCALE_KEY_PATTERN: &str = r#"(?m)['"](\w{2}-\w{2})['"]\s*:\s*\{|^\};[ \t]*\r?$"#;

/// Characters skipped between a closing brace and a trailing comma.
const SEPARATOR_WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

#[must_use]
/// Whether `locale` has the `xx-XX` shape, two lowercase letters, a hyphen, two uppercase.
pub fn is_locale_id(locale: &str) -> bool {
    let bytes = locale.as_bytes();
    bytes.len() == 5
        && bytes[..2].iter().all(u8::is_ascii_lowercase)
        && bytes[2] == b'-'
        && bytes[3..].iter().all(u8::is_ascii_uppercase)
}

/// List every locale identifier declared in the document, in document order.
///
/// # Errors
///
/// Returns an error if the locale key pattern fails to compile.
pub fn list_locales(document: &str) -> Result<Vec<String>> {
    let keys = Regex::new(LOCALE_KEY_PATTERN)?;
    Ok(keys
        .captures_iter(document)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect())
}

/// Find the block belonging to `locale`.
///
/// The block starts at the opening brace of `'<locale>': {` and ends where the next locale
/// key (or the table's closing `};` line) begins. Without either, it runs to document end.
///
/// # Errors
///
/// Returns [`Error::InvalidLocale`] for identifiers not shaped like `en-US`, and
/// [`Error::LocaleNotFound`] if no such key exists.
pub fn locate_locale(document: &str, locale: &str) -> Result<LocaleBlock> {
    if !is_locale_id(locale) {
        return Err(Error::InvalidLocale(locale.to_string()));
    }

    let keys = Regex::new(LOCALE_KEY_PATTERN)?;
    let mut matches = keys.captures_iter(document);

    let key = matches
        .by_ref()
        .find(|caps| caps.get(1).is_some_and(|id| id.as_str() == locale))
        .and_then(|caps| caps.get(0))
        .ok_or_else(|| Error::LocaleNotFound {
            locale: locale.to_string(),
        })?;

    // The key match ends on its opening brace.
    let start = key.end() - 1;
    let end = matches
        .next()
        .and_then(|caps| caps.get(0))
        .map_or(document.len(), |next| next.start());

    debug!(locale, start, end, "located locale block");
    Ok(LocaleBlock {
        locale: locale.to_string(),
        start,
        end,
    })
}

/// Find a section by dotted path within a locale block.
///
/// The first segment is searched for in the whole block; each further segment is searched for
/// inside the braces of the previous one. The first whitespace-prefixed `<segment>: {` in the
/// current bound wins.
///
/// # Errors
///
/// Returns [`Error::SectionNotFound`] if a segment is missing (or empty), and
/// [`Error::UnterminatedSection`] if a segment's braces never balance within its bound.
pub fn locate_section(document: &str, block: &LocaleBlock, path: &str) -> Result<SectionSpan> {
    let not_found = || Error::SectionNotFound {
        locale: block.locale.clone(),
        section: path.to_string(),
    };

    let mut bound = block.start + 1..block.end;
    let mut span = None;

    for segment in path.split('.') {
        if segment.is_empty() {
            return Err(not_found());
        }

        let key = Regex::new(&format!(r"\s({})\s*:\s*\{{", regex::escape(segment)))?;
        let caps = key
            .captures(&document[bound.clone()])
            .ok_or_else(not_found)?;
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            return Err(not_found());
        };

        let key_start = bound.start + name.start();
        let open_brace = bound.start + whole.end() - 1;
        let close_brace = find_closing_brace(document, open_brace, bound.end).ok_or_else(|| {
            Error::UnterminatedSection {
                locale: block.locale.clone(),
                section: path.to_string(),
                open_brace,
            }
        })?;
        let body_end = close_brace + 1;

        let found = SectionSpan {
            path: path.to_string(),
            indent_start: line_indent_start(document, key_start, bound.start),
            key_start,
            open_brace,
            close_brace,
            body_end,
            end: absorb_trailing_comma(document, body_end, bound.end),
        };
        bound = found.inner();
        span = Some(found);
    }

    let span = span.ok_or_else(not_found)?;
    debug!(
        locale = %block.locale,
        section = path,
        start = span.key_start,
        end = span.end,
        "located section"
    );
    Ok(span)
}

/// Locate a section by locale and dotted path in one step.
///
/// # Errors
///
/// Propagates the errors of [`locate_locale`] and [`locate_section`].
pub fn locate(document: &str, locale: &str, path: &str) -> Result<(LocaleBlock, SectionSpan)> {
    let block = locate_locale(document, locale)?;
    let span = locate_section(document, &block, path)?;
    debug_assert!(block.contains(&span));
    Ok((block, span))
}

#[must_use]
/// Find the brace matching the one at `open_brace`, scanning no further than `limit`.
///
/// Braces inside `"`, `'` or `` ` `` strings are ignored. Only the quote that opened a string
/// closes it, so apostrophes inside double-quoted text are fine. A backslash makes the scanner
/// skip the next character uninterpreted, both inside and outside strings.
///
/// Returns `None` when `limit` is reached before depth returns to zero.
pub fn find_closing_brace(document: &str, open_brace: usize, limit: usize) -> Option<usize> {
    let body = document.get(open_brace + 1..limit)?;
    let mut depth: usize = 1;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, ch) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match (quote, ch) {
            (_, '\\') => escaped = true,
            (Some(active), _) if ch == active => quote = None,
            (None, '"' | '\'' | '`') => quote = Some(ch),
            (None, '{') => depth += 1,
            (None, '}') => {
                depth -= 1;
                if depth == 0 {
                    return Some(open_brace + 1 + i);
                }
            }
            _ => {}
        }
    }

    None
}

#[must_use]
/// Offset just past a trailing comma following `from`, or `from` itself if there is none.
///
/// Only space, tab, newline and carriage return may sit between `from` and the comma.
pub fn absorb_trailing_comma(document: &str, from: usize, limit: usize) -> usize {
    let rest = &document[from..limit];
    let trimmed = rest.trim_start_matches(SEPARATOR_WHITESPACE);
    if trimmed.starts_with(',') {
        from + (rest.len() - trimmed.len()) + 1
    } else {
        from
    }
}

/// Start of the run of spaces and tabs directly before `key_start`, never crossing a newline
/// or `floor`.
fn line_indent_start(document: &str, key_start: usize, floor: usize) -> usize {
    let before = &document[floor..key_start];
    floor + before.trim_end_matches([' ', '\t']).len()
}

#[cfg(test)]
#[path = "tests/scan.rs"]
mod tests;
