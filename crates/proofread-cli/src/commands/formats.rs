//! Formats command implementation.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use proofread_document::{classify, SUPPORTED_EXTENSIONS};
use std::path::Path;

/// Execute the formats command.
pub async fn execute_formats(formatter: &Formatter) -> Result<()> {
    println!("{}", render_formats(formatter)?);
    Ok(())
}

fn render_formats(formatter: &Formatter) -> Result<String> {
    let rows: Vec<(&str, &str)> = SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| {
            let sample = format!("file.{}", ext);
            (*ext, classify(Path::new(&sample)).as_str())
        })
        .collect();

    match formatter.format() {
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = rows
                .iter()
                .map(|(ext, kind)| serde_json::json!({ "extension": ext, "format": kind }))
                .collect();
            Ok(serde_json::to_string_pretty(&json)?)
        }
        OutputFormat::Quiet => Ok(rows
            .iter()
            .map(|(ext, _)| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(rows
            .iter()
            .map(|(ext, kind)| format!(".{:<6} {}", ext, kind))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
