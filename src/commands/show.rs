//! Implementation of the `show` command.

use anyhow::{Context, Result};

use crate::commands::locate;
use crate::templates::{TemplateId, TemplateSource};

/// Reads the content of `template` from `source`.
pub fn read_template(template: TemplateId, source: &TemplateSource) -> Result<String> {
    locate(template, source)?
        .read_to_string()
        .with_context(|| format!("Failed to read template '{}'", template))
}

/// Execute the `show` command.
pub fn execute(template: TemplateId, source: &TemplateSource) -> Result<()> {
    let content = read_template(template, source)?;
    print!("{}", content);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_packaged_template() {
        let content =
            read_template(TemplateId::DefaultExpectedTrace, &TemplateSource::Embedded).unwrap();
        assert!(content.contains("{{testingId}}"));
    }

    #[test]
    fn missing_template_names_the_template() {
        let temp_dir = TempDir::new().unwrap();
        let source = TemplateSource::Directory(temp_dir.path().to_path_buf());
        let err = read_template(TemplateId::StatsdExpectedMetric, &source).unwrap_err();
        assert!(err.to_string().contains("statsd-expected-metric"));
    }
}
