//! Implementation of the `list` command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::templates::{TemplateId, TemplateKind, TemplateSource};

/// Arguments for the `list` command.
pub struct ListArgs {
    /// Where templates are resolved from.
    pub source: TemplateSource,
    /// Output format.
    pub format: OutputFormat,
}

/// A predefined template as shown by `list`.
#[derive(Debug, Clone, Serialize)]
pub struct ListedTemplate {
    pub name: &'static str,
    pub kind: TemplateKind,
    /// Canonical locator, absent when the template does not resolve.
    pub locator: Option<String>,
}

/// Resolves every predefined template against `source`.
pub fn collect(source: &TemplateSource) -> Vec<ListedTemplate> {
    TemplateId::all()
        .iter()
        .map(|id| ListedTemplate {
            name: id.name(),
            kind: id.kind(),
            locator: id.resolve(source).map(|path| path.to_string()),
        })
        .collect()
}

/// Execute the `list` command.
pub fn execute(args: ListArgs) -> Result<()> {
    let templates = collect(&args.source);

    match args.format {
        OutputFormat::Text => {
            let width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
            for template in &templates {
                println!(
                    "{:<width$}  {:<6}  {}",
                    template.name,
                    template.kind.to_string(),
                    template.locator.as_deref().unwrap_or("-"),
                    width = width
                );
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&templates)
                .context("Failed to serialize template list")?;
            println!("{}", json);
        }
    }

    Ok(())
}
