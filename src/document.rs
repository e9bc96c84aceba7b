/// An immutable source document: the raw text plus its line decomposition.
///
/// Each element of `lines` keeps its original terminator, so concatenating
/// the lines in order reproduces `raw` byte for byte. Offset arithmetic in
/// [`SourceDocument::resolve_line`] depends on that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    raw: String,
    lines: Vec<String>,
}

impl SourceDocument {
    #[must_use]
    pub fn new(raw: String) -> Self {
        let lines = raw.split_inclusive('\n').map(String::from).collect();
        Self { raw, lines }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Resolves an absolute byte offset to a 1-based line number.
    ///
    /// Walks the line sequence accumulating lengths; the first line whose
    /// span contains the offset wins. Returns `None` for offsets past the
    /// end of the document. No caching: this runs once per rule, not per
    /// character.
    #[must_use]
    pub fn resolve_line(&self, offset: usize) -> Option<usize> {
        let mut remaining = offset;
        for (index, line) in self.lines.iter().enumerate() {
            if remaining < line.len() {
                return Some(index + 1);
            }
            remaining -= line.len();
        }
        None
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
