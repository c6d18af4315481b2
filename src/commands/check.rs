//! Implementation of the `check` command for verifying predefined templates.

use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::registry::Registry;
use crate::templates::TemplateSource;
use crate::verification::{CheckReport, TemplateStatus, run_check};

/// Arguments for the `check` command.
pub struct CheckArgs {
    /// Where templates are resolved from.
    pub source: TemplateSource,
    /// Attempt every template instead of stopping at the first failure.
    pub keep_going: bool,
    /// Output format.
    pub format: OutputFormat,
}

/// Decides whether to keep going after a failure.
///
/// Command-line flags win over the configured `check.keep_going`.
pub fn effective_keep_going(keep_going: bool, no_keep_going: bool, configured: bool) -> bool {
    if no_keep_going {
        false
    } else {
        keep_going || configured
    }
}

/// Execute the `check` command.
pub fn execute(args: CheckArgs) -> Result<()> {
    let registry = Registry::predefined(&args.source);
    log::info!(
        "checking {} templates from {:?}",
        registry.len(),
        args.source
    );

    let report = run_check(&registry, args.keep_going);

    match args.format {
        OutputFormat::Text => output_text(&report),
        OutputFormat::Json => output_json(&report)?,
    }

    if report.ok {
        Ok(())
    } else {
        anyhow::bail!(
            "Check failed: {} template{} failed",
            report.failed,
            if report.failed == 1 { "" } else { "s" }
        );
    }
}

/// Output the report in human-readable text format.
fn output_text(report: &CheckReport) {
    for outcome in &report.outcomes {
        match outcome.status {
            TemplateStatus::Verified => println!(
                "ok      {} ({} bytes)",
                outcome.id,
                outcome.bytes.unwrap_or(0)
            ),
            TemplateStatus::Failed => println!(
                "FAILED  {}: {}",
                outcome.id,
                outcome.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    let skipped = report.templates_total - report.outcomes.len();
    println!();
    if skipped > 0 {
        println!(
            "{} verified, {} failed, {} not checked",
            report.verified, report.failed, skipped
        );
    } else {
        println!("{} verified, {} failed", report.verified, report.failed);
    }
}

/// Output the report in JSON format.
fn output_json(report: &CheckReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::templates::{TEMPLATE_DIR, TemplateId};

    #[test]
    fn flags_override_configured_keep_going() {
        assert!(effective_keep_going(false, false, true));
        assert!(!effective_keep_going(false, true, true));
        assert!(effective_keep_going(true, false, false));
        assert!(!effective_keep_going(false, false, false));
    }

    #[test]
    fn check_passes_for_packaged_templates() {
        let result = execute(CheckArgs {
            source: TemplateSource::Embedded,
            keep_going: false,
            format: OutputFormat::Json,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn check_fails_for_incomplete_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join(TEMPLATE_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            temp_dir
                .path()
                .join(TemplateId::DefaultExpectedMetric.resource_name()),
            "- metricName: latency\n",
        )
        .unwrap();

        let err = execute(CheckArgs {
            source: TemplateSource::Directory(temp_dir.path().to_path_buf()),
            keep_going: true,
            format: OutputFormat::Text,
        })
        .unwrap_err();

        let expected = TemplateId::all().len() - 1;
        assert_eq!(
            err.to_string(),
            format!("Check failed: {} templates failed", expected)
        );
    }

    #[test]
    fn check_fails_fast_without_keep_going() {
        let temp_dir = TempDir::new().unwrap();
        let err = execute(CheckArgs {
            source: TemplateSource::Directory(temp_dir.path().to_path_buf()),
            keep_going: false,
            format: OutputFormat::Text,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Check failed: 1 template failed");
    }
}
