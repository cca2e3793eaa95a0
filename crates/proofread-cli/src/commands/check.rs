//! Check command implementation.

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use proofread_checker::{CheckReport, Checker, CheckerConfig};
use proofread_domain::AnalysisTransport;
use proofread_llm::OpenAiTransport;
use std::fmt::Display;
use tracing::info;

/// Execute the check command.
///
/// The blocking round trip runs on a `spawn_blocking` worker; the HTTP client
/// is created and dropped there as well.
pub async fn execute_check(args: CheckArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    config.apply_overrides(args.model, args.max_tokens)?;

    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => {
            info!("Extracting {}", path.display());
            proofread_document::extract(&path)?
        }
        (None, None) => {
            return Err(CliError::InvalidInput(
                "Must specify either a file or --text".to_string(),
            ))
        }
    };

    let checker_config = config.checker.clone();
    let strict = args.strict;
    let source = text.clone();

    let report = tokio::task::spawn_blocking(move || -> Result<CheckReport> {
        let transport = OpenAiTransport::new(&checker_config.endpoint, checker_config.timeout())?;
        run_check(Checker::new(transport), &source, &checker_config, strict)
    })
    .await
    .map_err(|e| CliError::Task(e.to_string()))??;

    if let Some(diagnostic) = &report.diagnostic {
        eprintln!("{}", formatter.warning(&format!("Check did not complete: {}", diagnostic)));
    }

    println!("{}", formatter.format_issues(&report.issues, &text)?);

    Ok(())
}

/// Run one check, strictly or with failures reduced to an empty report.
pub fn run_check<T>(
    checker: Checker<T>,
    text: &str,
    config: &CheckerConfig,
    strict: bool,
) -> Result<CheckReport>
where
    T: AnalysisTransport,
    T::Error: Display,
{
    if strict {
        let issues = checker.check(text, config)?;
        Ok(CheckReport {
            issues,
            diagnostic: None,
        })
    } else {
        Ok(checker.check_or_empty(text, config))
    }
}
