//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use proofread_domain::Issue;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style, Width},
};

/// Maximum width of the explanation column in table output.
const EXPLANATION_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format issues found in `source_text`.
    pub fn format_issues(&self, issues: &[Issue], source_text: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_issues_json(issues, source_text),
            OutputFormat::Table => Ok(self.format_issues_table(issues, source_text)),
            OutputFormat::Quiet => Ok(self.format_issues_quiet(issues)),
        }
    }

    /// Format issues as JSON.
    fn format_issues_json(&self, issues: &[Issue], source_text: &str) -> Result<String> {
        let json_issues: Vec<serde_json::Value> = issues
            .iter()
            .map(|issue| {
                serde_json::json!({
                    "original": issue.original_text(),
                    "suggestion": issue.suggestion(),
                    "explanation": issue.explanation(),
                    "position": issue.position(),
                    "length": issue.length(),
                    "anchored": issue.is_anchored(source_text),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_issues)?)
    }

    /// Format issues as a table.
    ///
    /// Positions that do not point at the original text are shown as `~N`.
    fn format_issues_table(&self, issues: &[Issue], source_text: &str) -> String {
        if issues.is_empty() {
            return self.colorize("No issues found.", "green");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Position", "Original", "Suggestion", "Explanation"]);

        for (idx, issue) in issues.iter().enumerate() {
            let position = if issue.is_anchored(source_text) {
                issue.position().to_string()
            } else {
                format!("~{}", issue.position())
            };
            builder.push_record([
                (idx + 1).to_string(),
                position,
                issue.original_text().to_string(),
                issue.suggestion().to_string(),
                issue.explanation().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(EXPLANATION_WIDTH)));

        format!("{}\n{}", table, self.issue_count(issues.len()))
    }

    /// Format issues in quiet mode (tab-separated position, original, suggestion).
    fn format_issues_quiet(&self, issues: &[Issue]) -> String {
        issues
            .iter()
            .map(|i| format!("{}\t{}\t{}", i.position(), i.original_text(), i.suggestion()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn issue_count(&self, count: usize) -> String {
        self.info(&format!("{} issue(s) found", count))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "teh cat sat";

    fn sample_issues() -> Vec<Issue> {
        vec![
            Issue::new("teh", "the", "typo", 0),
            Issue::new("sat", "sits", "tense", 2),
        ]
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_issues(&sample_issues(), SOURCE).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json[0]["original"], "teh");
        assert_eq!(json[0]["length"], 3);
        assert_eq!(json[0]["anchored"], true);
        assert_eq!(json[1]["anchored"], false);
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_issues(&sample_issues(), SOURCE).unwrap();
        assert!(output.contains("Suggestion"));
        assert!(output.contains("Explanation"));
        assert!(output.contains("~2"));
        assert!(output.contains("2 issue(s) found"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_issues(&sample_issues(), SOURCE).unwrap();
        assert_eq!(output, "0\tteh\tthe\n2\tsat\tsits");
    }

    #[test]
    fn test_empty_issues() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_issues(&[], SOURCE).unwrap();
        assert!(output.contains("No issues found"));

        let formatter = Formatter::new(OutputFormat::Json, false);
        assert_eq!(formatter.format_issues(&[], SOURCE).unwrap(), "[]");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
