//! Command implementations for the expected-templates CLI.

pub mod check;
pub mod list;
pub mod path;
pub mod show;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::registry::Registry;
use crate::resource::ResourcePath;
use crate::templates::{TemplateId, TemplateSource};

/// Loads the nearest config above the working directory and picks the
/// template source.
pub fn load_source(templates_dir: Option<PathBuf>) -> Result<(Config, TemplateSource)> {
    let (config, base) = config::load_nearest()?;
    Ok(select_source(config, &base, templates_dir))
}

/// Like [`load_source`], searching for the config from `start`.
pub fn load_source_from(
    start: &Path,
    templates_dir: Option<PathBuf>,
) -> Result<(Config, TemplateSource)> {
    let (config, base) = config::load_nearest_from(start)?;
    Ok(select_source(config, &base, templates_dir))
}

/// An explicit `--templates-dir` wins over `templates.dir` from the config.
fn select_source(
    config: Config,
    base: &Path,
    templates_dir: Option<PathBuf>,
) -> (Config, TemplateSource) {
    let source = match templates_dir {
        Some(dir) => TemplateSource::Directory(dir),
        None => config.template_source(base),
    };
    (config, source)
}

/// Looks a template up in the predefined registry for `source`.
pub fn locate(template: TemplateId, source: &TemplateSource) -> Result<ResourcePath> {
    Registry::predefined(source)
        .get(template.name())
        .and_then(|entry| entry.path.clone())
        .with_context(|| format!("Template '{}' did not resolve to a resource", template))
}
