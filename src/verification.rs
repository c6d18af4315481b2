//! Verification that registry entries resolve to readable resources.
//!
//! Each entry goes through two steps: its locator must be present, and the
//! locator's canonical string form must parse back into a locator whose
//! content reads fully as text. Entries are checked one at a time, in
//! registry order.

use serde::Serialize;
use thiserror::Error;

use crate::registry::{Entry, Registry};
use crate::resource::{ResourceError, ResourcePath};

/// Why a template failed verification.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("template '{id}' did not resolve to a resource path")]
    MissingResolution { id: String },

    #[error("template '{id}' at {locator} is unreadable: {source}")]
    Unreadable {
        id: String,
        locator: String,
        #[source]
        source: ResourceError,
    },
}

impl CheckError {
    /// The identifier of the template that failed.
    pub fn id(&self) -> &str {
        match self {
            CheckError::MissingResolution { id } | CheckError::Unreadable { id, .. } => id,
        }
    }
}

/// A template that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedTemplate {
    pub id: String,
    /// Canonical locator the content was read from.
    pub locator: String,
    /// Size of the content in bytes.
    pub bytes: usize,
}

/// Verifies a single entry.
pub fn verify_entry(entry: &Entry) -> Result<VerifiedTemplate, CheckError> {
    let path = entry
        .path
        .as_ref()
        .ok_or_else(|| CheckError::MissingResolution {
            id: entry.id.clone(),
        })?;

    let locator = path.to_string();
    let unreadable = |source| CheckError::Unreadable {
        id: entry.id.clone(),
        locator: locator.clone(),
        source,
    };

    let content = locator
        .parse::<ResourcePath>()
        .and_then(|fresh| fresh.read_to_string())
        .map_err(unreadable)?;

    log::debug!("verified {} ({} bytes)", entry.id, content.len());
    Ok(VerifiedTemplate {
        id: entry.id.clone(),
        locator,
        bytes: content.len(),
    })
}

/// Verifies every entry in order, stopping at the first failure.
pub fn verify_all(registry: &Registry) -> Result<Vec<VerifiedTemplate>, CheckError> {
    registry.entries().iter().map(verify_entry).collect()
}

/// Final state of a checked template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    Verified,
    Failed,
}

/// Outcome of checking one template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateOutcome {
    pub id: String,
    pub status: TemplateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Results of a registry check.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Number of templates in the registry.
    pub templates_total: usize,
    /// Number of templates that passed.
    pub verified: usize,
    /// Number of templates that failed.
    pub failed: usize,
    /// True when every template in the registry was verified.
    pub ok: bool,
    /// One outcome per attempted template, in registry order.
    pub outcomes: Vec<TemplateOutcome>,
}

/// Checks the registry and reports per-template outcomes.
///
/// Without `keep_going` the walk ends at the first failure and later
/// templates are absent from the report.
pub fn run_check(registry: &Registry, keep_going: bool) -> CheckReport {
    let mut outcomes = Vec::with_capacity(registry.len());

    for entry in registry.entries() {
        let outcome = match verify_entry(entry) {
            Ok(verified) => TemplateOutcome {
                id: verified.id,
                status: TemplateStatus::Verified,
                locator: Some(verified.locator),
                bytes: Some(verified.bytes),
                error: None,
            },
            Err(err) => {
                log::warn!("{}", err);
                TemplateOutcome {
                    id: entry.id.clone(),
                    status: TemplateStatus::Failed,
                    locator: entry.path.as_ref().map(ToString::to_string),
                    bytes: None,
                    error: Some(err.to_string()),
                }
            }
        };

        let failed = outcome.status == TemplateStatus::Failed;
        outcomes.push(outcome);
        if failed && !keep_going {
            break;
        }
    }

    let verified = outcomes
        .iter()
        .filter(|o| o.status == TemplateStatus::Verified)
        .count();
    let failed = outcomes.len() - verified;

    CheckReport {
        templates_total: registry.len(),
        verified,
        failed,
        ok: failed == 0 && verified == registry.len(),
        outcomes,
    }
}
