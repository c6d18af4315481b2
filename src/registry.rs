//! The ordered set of template identifiers and their resolved locators.

use crate::resource::ResourcePath;
use crate::templates::{TemplateId, TemplateSource};

/// One registry member: an identifier and the locator it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Template identifier.
    pub id: String,
    /// Resolved locator, or `None` when nothing backs the identifier.
    pub path: Option<ResourcePath>,
}

impl Entry {
    pub fn new(id: impl Into<String>, path: Option<ResourcePath>) -> Self {
        Self {
            id: id.into(),
            path,
        }
    }
}

/// An immutable, ordered collection of template entries.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Resolves every predefined template against `source`, in declared order.
    pub fn predefined(source: &TemplateSource) -> Self {
        log::debug!("resolving predefined templates from {:?}", source);
        Self::from_entries(
            TemplateId::all()
                .iter()
                .map(|id| Entry::new(id.name(), id.resolve(source))),
        )
    }

    /// Builds a registry from entries, keeping their order.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Looks up an entry by identifier.
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
