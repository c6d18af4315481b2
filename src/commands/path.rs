//! Implementation of the `path` command.

use anyhow::Result;

use crate::commands::locate;
use crate::templates::{TemplateId, TemplateSource};

/// Execute the `path` command.
pub fn execute(template: TemplateId, source: &TemplateSource) -> Result<()> {
    println!("{}", locate(template, source)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn packaged_template_has_a_path() {
        assert!(execute(TemplateId::DefaultExpectedLog, &TemplateSource::Embedded).is_ok());
    }

    #[test]
    fn unresolved_template_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = TemplateSource::Directory(temp_dir.path().to_path_buf());
        let err = execute(TemplateId::DefaultExpectedLog, &source).unwrap_err();
        assert!(err.to_string().contains("default-expected-log"));
    }
}
