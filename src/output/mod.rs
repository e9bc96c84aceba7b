mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, DEFAULT_WRAP_WIDTH, TextFormatter};

use crate::error::Result;
use crate::rules::Finding;

/// Trait for rendering a scan's findings into an output format.
pub trait ReportFormatter {
    /// Render the findings into a string.
    ///
    /// # Errors
    /// Returns an error if rendering fails.
    fn format(&self, findings: &[Finding]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
