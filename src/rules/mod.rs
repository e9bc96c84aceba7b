mod catalog;
mod pattern;
mod unchecked_send;

pub use catalog::builtin_rules;
pub use pattern::PatternRule;
pub use unchecked_send::UncheckedSendRule;

use serde::Serialize;

use crate::document::SourceDocument;
use crate::error::Result;

/// A named, independent check evaluated against one document.
///
/// Implementations are stateless; `evaluate` produces exactly one
/// [`Finding`] per call (first-match-only policy). An `Err` from a rule is
/// isolated by the engine and must not prevent other rules from running.
pub trait RuleCheck {
    fn id(&self) -> &'static str;

    /// Human-readable category used for the report section header.
    fn category(&self) -> &'static str;

    /// # Errors
    /// Returns an error if the rule's evaluation fails unexpectedly; the
    /// clean "no match" outcome is a `Finding`, never an error.
    fn evaluate(&self, doc: &SourceDocument) -> Result<Finding>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// The rule's pattern matched; `line` carries the first occurrence.
    Flagged,
    /// The expected outcome when nothing matched.
    Clean,
    /// The rule itself failed; `detail` carries the error text.
    Error,
}

/// The per-rule result of a scan. Produced fresh each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule_id: String,
    pub category: String,
    pub kind: FindingKind,
    pub line: Option<usize>,
    pub detail: String,
}

impl Finding {
    #[must_use]
    pub fn flagged(rule: &dyn RuleCheck, line: usize, detail: String) -> Self {
        Self {
            rule_id: rule.id().to_string(),
            category: rule.category().to_string(),
            kind: FindingKind::Flagged,
            line: Some(line),
            detail,
        }
    }

    #[must_use]
    pub fn clean(rule: &dyn RuleCheck, detail: &str) -> Self {
        Self {
            rule_id: rule.id().to_string(),
            category: rule.category().to_string(),
            kind: FindingKind::Clean,
            line: None,
            detail: detail.to_string(),
        }
    }

    #[must_use]
    pub fn analysis_error(rule: &dyn RuleCheck, detail: String) -> Self {
        Self {
            rule_id: rule.id().to_string(),
            category: rule.category().to_string(),
            kind: FindingKind::Error,
            line: None,
            detail,
        }
    }

    #[must_use]
    pub const fn is_flagged(&self) -> bool {
        matches!(self.kind, FindingKind::Flagged)
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        matches!(self.kind, FindingKind::Clean)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, FindingKind::Error)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
