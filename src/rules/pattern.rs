use regex::Regex;

use crate::document::SourceDocument;
use crate::error::{Result, SolsniffError};

use super::{Finding, RuleCheck};

/// A single-pattern rule: the first occurrence of `pattern` in the raw
/// text is resolved to a line number and reported through the positive
/// message template; no occurrence yields the fixed negative message.
pub struct PatternRule {
    id: &'static str,
    category: &'static str,
    pattern: Regex,
    positive: fn(usize) -> String,
    negative: &'static str,
}

impl PatternRule {
    /// # Errors
    /// Returns [`SolsniffError::InvalidPattern`] if the pattern does not
    /// compile. Patterns are hard-coded, so this is a startup-time defect,
    /// not a runtime condition.
    pub fn new(
        id: &'static str,
        category: &'static str,
        pattern: &str,
        positive: fn(usize) -> String,
        negative: &'static str,
    ) -> Result<Self> {
        let pattern = compile_pattern(pattern)?;
        Ok(Self {
            id,
            category,
            pattern,
            positive,
            negative,
        })
    }
}

impl RuleCheck for PatternRule {
    fn id(&self) -> &'static str {
        self.id
    }

    fn category(&self) -> &'static str {
        self.category
    }

    fn evaluate(&self, doc: &SourceDocument) -> Result<Finding> {
        let Some(found) = self.pattern.find(doc.raw()) else {
            return Ok(Finding::clean(self, self.negative));
        };

        // A true substring match always resolves; an unresolvable offset
        // falls through to the clean outcome rather than aborting the scan.
        match doc.resolve_line(found.start()) {
            Some(line) => Ok(Finding::flagged(self, line, (self.positive)(line))),
            None => Ok(Finding::clean(self, self.negative)),
        }
    }
}

pub(super) fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| SolsniffError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
