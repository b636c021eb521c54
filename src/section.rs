//! Located regions of a translation table document.
//!
//! Both types hold absolute byte offsets into the document they were located in. They are only
//! meaningful for that exact document value: any splice invalidates them.

#[derive(Clone, Debug, PartialEq, Eq)]
/// The search boundary for one locale: from its opening brace up to the next sibling locale.
pub struct LocaleBlock {
    /// Locale identifier, e.g. `en-US`.
    pub locale: String,
    /// Byte offset of the opening brace after `'<locale>':`.
    pub start: usize,
    /// Byte offset where the next locale key or the table terminator begins, or document end.
    pub end: usize,
}

impl LocaleBlock {
    #[must_use]
    /// Whether a section span lies entirely within this block.
    pub fn contains(&self, span: &SectionSpan) -> bool {
        self.start <= span.indent_start && span.end <= self.end
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A named `key: { ... }` entry with coordinates for every splice boundary.
///
/// ```text
///     landing: { a: 'x' }  ,
/// ^   ^        ^         ^  ^
/// |   |        |         |  end
/// |   |        |         close_brace (body_end = close_brace + 1)
/// |   |        open_brace
/// |   key_start
/// indent_start
/// ```
pub struct SectionSpan {
    /// Dotted path this span was located by.
    pub path: String,
    /// Start of the spaces and tabs directly before the key on its line.
    pub indent_start: usize,
    /// Byte offset of the first character of the key.
    pub key_start: usize,
    /// Byte offset of the section's opening brace.
    pub open_brace: usize,
    /// Byte offset of the matching closing brace.
    pub close_brace: usize,
    /// One past the closing brace.
    pub body_end: usize,
    /// One past the absorbed trailing comma, or `body_end` when there is none.
    pub end: usize,
}

impl SectionSpan {
    #[must_use]
    /// Whether a trailing comma was absorbed into the span.
    pub fn has_trailing_comma(&self) -> bool {
        self.end > self.body_end
    }

    #[must_use]
    /// Byte range of the section's contents, between its braces.
    pub fn inner(&self) -> std::ops::Range<usize> {
        self.open_brace + 1..self.close_brace
    }
}
