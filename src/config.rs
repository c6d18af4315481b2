//! Configuration file handling.
//!
//! This module defines the `.expected-templates.toml` schema and provides
//! functions for locating, loading, and validating it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::templates::TemplateSource;

/// The default configuration filename.
pub const CONFIG_FILENAME: &str = ".expected-templates.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Template location settings.
    #[serde(default)]
    pub templates: TemplatesSection,
    /// Registry check settings.
    #[serde(default)]
    pub check: CheckSection,
}

/// Template location section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TemplatesSection {
    /// Directory holding templates, relative to the config file.
    /// Packaged templates are used when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Registry check section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckSection {
    /// Attempt every template instead of stopping at the first failure.
    #[serde(default)]
    pub keep_going: bool,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.templates.dir
            && dir.as_os_str().is_empty()
        {
            anyhow::bail!("templates.dir cannot be empty");
        }
        Ok(())
    }

    /// The template source this config selects, resolving `templates.dir`
    /// against `base` (normally the directory holding the config file).
    pub fn template_source(&self, base: &Path) -> TemplateSource {
        match &self.templates.dir {
            Some(dir) => TemplateSource::Directory(base.join(dir)),
            None => TemplateSource::Embedded,
        }
    }
}

/// Find the config file by walking up from `start`.
pub fn find_config_path_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.is_file() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load the nearest config above the working directory.
pub fn load_nearest() -> Result<(Config, PathBuf)> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    load_nearest_from(&cwd)
}

/// Load the nearest config at or above `start`.
///
/// Returns the config together with the directory it was found in, or the
/// defaults and `start` when there is none.
pub fn load_nearest_from(start: &Path) -> Result<(Config, PathBuf)> {
    match find_config_path_from(start) {
        Some(path) => {
            log::debug!("using config {}", path.display());
            let config = Config::load(&path)?;
            let base = path
                .parent()
                .map_or_else(|| start.to_path_buf(), Path::to_path_buf);
            Ok((config, base))
        }
        None => {
            log::debug!("no {} found, using defaults", CONFIG_FILENAME);
            Ok((Config::default(), start.to_path_buf()))
        }
    }
}
