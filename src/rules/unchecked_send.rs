use regex::Regex;

use crate::document::SourceDocument;
use crate::error::Result;

use super::pattern::compile_pattern;
use super::{Finding, RuleCheck};

const BARE_SEND_PATTERN: &str = r".+\.send\(";
const CHECKED_SEND_PATTERN: &str = r"(?:require|assert)\(.+\.send\(.*\)\);";

/// Flags `send()` calls whose boolean result looks unchecked.
///
/// The one composite rule in the catalog: it takes the first match of a
/// bare `.send(` call and the first match of a `require`/`assert`-wrapped
/// send, and flags when the two start offsets differ. Both patterns absent
/// compares equal and reports clean. Only first occurrences are compared,
/// so a checked send early in the file can mask an unchecked one later;
/// an indented wrapper also resolves to a different offset than the bare
/// match and gets flagged.
pub struct UncheckedSendRule {
    bare: Regex,
    checked: Regex,
}

impl UncheckedSendRule {
    /// # Errors
    /// Returns [`crate::SolsniffError::InvalidPattern`] if either
    /// hard-coded pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            bare: compile_pattern(BARE_SEND_PATTERN)?,
            checked: compile_pattern(CHECKED_SEND_PATTERN)?,
        })
    }
}

impl RuleCheck for UncheckedSendRule {
    fn id(&self) -> &'static str {
        "unchecked-send"
    }

    fn category(&self) -> &'static str {
        "possible unchecked send() calls"
    }

    fn evaluate(&self, doc: &SourceDocument) -> Result<Finding> {
        let bare_pos = self.bare.find(doc.raw()).map(|m| m.start());
        let checked_pos = self.checked.find(doc.raw()).map(|m| m.start());

        let flagged_at = match (bare_pos, checked_pos) {
            (Some(bare), checked) if checked != Some(bare) => doc.resolve_line(bare),
            _ => None,
        };

        match flagged_at {
            Some(line) => Ok(Finding::flagged(
                self,
                line,
                format!(
                    "Possibly unchecked send() on line {line} - send() returns false on \
                     failure rather than reverting, so an ignored return value can \
                     silently drop a transfer"
                ),
            )),
            None => Ok(Finding::clean(
                self,
                "No unchecked send() calls detected by this test",
            )),
        }
    }
}

#[cfg(test)]
#[path = "unchecked_send_tests.rs"]
mod tests;
