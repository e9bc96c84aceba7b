use crate::document::SourceDocument;
use crate::error::{Result, SolsniffError};
use crate::rules::{Finding, RuleCheck, builtin_rules};

/// Runs a rule catalog against one document, in declaration order.
///
/// Rules are stateless and evaluated sequentially; the output order is the
/// catalog order, which keeps reports reproducible. A rule that returns an
/// error is folded into an analysis-error finding so the remaining rules
/// still run and report.
pub struct RuleEngine {
    rules: Vec<Box<dyn RuleCheck>>,
}

impl RuleEngine {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn RuleCheck>>) -> Self {
        Self { rules }
    }

    /// # Errors
    /// Returns an error if a builtin pattern fails to compile.
    pub fn with_builtin_rules() -> Result<Self> {
        Ok(Self::new(builtin_rules()?))
    }

    #[must_use]
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Removes the given rule ids from the catalog, keeping the order of
    /// the remainder.
    ///
    /// # Errors
    /// Returns a configuration error if an id names no known rule.
    pub fn disable(&mut self, disabled: &[String]) -> Result<()> {
        for id in disabled {
            if !self.rules.iter().any(|r| r.id() == id.as_str()) {
                return Err(SolsniffError::Config(format!("unknown rule id: {id}")));
            }
        }
        self.rules
            .retain(|r| !disabled.iter().any(|id| id.as_str() == r.id()));
        Ok(())
    }

    /// Evaluates every rule against the document, one finding per rule.
    #[must_use]
    pub fn scan(&self, doc: &SourceDocument) -> Vec<Finding> {
        self.rules
            .iter()
            .map(|rule| {
                rule.evaluate(doc).unwrap_or_else(|e| {
                    Finding::analysis_error(rule.as_ref(), format!("Analysis error: {e}"))
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
