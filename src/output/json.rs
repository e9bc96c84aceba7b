use crate::error::Result;
use crate::rules::Finding;

use super::ReportFormatter;

/// Renders findings as a pretty-printed JSON array.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, findings: &[Finding]) -> Result<String> {
        let json = serde_json::to_string_pretty(findings)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
