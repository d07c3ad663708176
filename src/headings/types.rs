/// A located occurrence of a heading tag in source text.
///
/// Offsets are byte offsets into the scanned source; the heading is the
/// full `<hN ...>...</hN>` span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    /// Heading level (1-6)
    pub level: usize,
    /// Raw attribute substring of the opening tag, may be empty
    pub attributes: String,
    /// Raw markup between the opening and closing tags
    pub inner: String,
    /// Offset of the start of the full match
    pub start: usize,
    /// Offset one past the end of the full match
    pub end: usize,
    /// Identifier captured from an `id="..."` attribute, when scanned for one
    pub id: Option<String>,
}
