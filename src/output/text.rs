use std::fmt::Write;

use crate::error::Result;
use crate::rules::{Finding, FindingKind};

use super::ReportFormatter;

pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Renders findings as word-wrapped report sections.
///
/// Each finding gets a `Checking for <category>` header, a dash separator,
/// and a single `!` (flagged) or `-` (clean) message block. Details longer
/// than the wrap width break between words, with continuation lines
/// indented to align under the first detail character.
pub struct TextFormatter {
    use_colors: bool,
    width: usize,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_width(mode, DEFAULT_WRAP_WIDTH)
    }

    #[must_use]
    pub fn with_width(mode: ColorMode, width: usize) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            width,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn marker(finding: &Finding) -> &'static str {
        match finding.kind {
            FindingKind::Flagged | FindingKind::Error => "!",
            FindingKind::Clean => "-",
        }
    }

    fn colorize_marker(&self, line: &str, finding: &Finding) -> String {
        if !self.use_colors {
            return line.to_string();
        }

        let color = match finding.kind {
            FindingKind::Flagged | FindingKind::Error => ansi::RED,
            FindingKind::Clean => ansi::GREEN,
        };
        let marker = Self::marker(finding);

        line.replacen(marker, &format!("{color}{marker}{}", ansi::RESET), 1)
    }

    fn format_finding(&self, finding: &Finding, output: &mut String) {
        let header = format!("Checking for {}", finding.category);
        let _ = writeln!(output, "{header}");
        let _ = writeln!(output, "{}", "-".repeat(header.len()));
        output.push('\n');

        let prefix = format!("  {} ", Self::marker(finding));
        let mut wrapped = wrap(&prefix, &finding.detail, self.width).into_iter();
        if let Some(first) = wrapped.next() {
            let _ = writeln!(output, "{}", self.colorize_marker(&first, finding));
        }
        for line in wrapped {
            let _ = writeln!(output, "{line}");
        }
        output.push('\n');
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, findings: &[Finding]) -> Result<String> {
        let mut output = String::new();
        for finding in findings {
            self.format_finding(finding, &mut output);
        }
        Ok(output)
    }
}

/// Greedy word wrap: fills lines up to `width` columns without ever
/// breaking a word. The first line starts with `prefix`; continuation
/// lines are indented by the prefix width so the text column lines up.
/// A word longer than the width gets a line of its own.
fn wrap(prefix: &str, text: &str, width: usize) -> Vec<String> {
    let indent = " ".repeat(prefix.chars().count());
    let mut lines = Vec::new();
    let mut current = prefix.to_string();
    let mut current_width = prefix.chars().count();
    let mut line_has_words = false;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if line_has_words && current_width + 1 + word_width > width {
            lines.push(current);
            current = indent.clone();
            current_width = indent.len();
            line_has_words = false;
        }
        if line_has_words {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
        line_has_words = true;
    }

    lines.push(current);
    lines
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
