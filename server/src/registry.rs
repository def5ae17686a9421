//! Static policy registry
//!
//! Insertion-ordered mapping from policy identifier to document. The
//! identifier doubles as the URL path segment and is matched
//! case-sensitively. Listing order is insertion order.

use policy_model::{PolicyDocument, PolicyListItem};

/// The sole source of truth for policy content.
#[derive(Debug, Default)]
pub struct PolicyRegistry {
    entries: Vec<(String, PolicyDocument)>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `document` under `id`.
    ///
    /// Re-registering an existing id replaces the document in place so the
    /// listing order stays stable.
    pub fn insert(&mut self, id: impl Into<String>, document: PolicyDocument) {
        let id = id.into();
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => *existing = document,
            None => self.entries.push((id, document)),
        }
    }

    /// Look up a document by its exact identifier.
    pub fn get(&self, id: &str) -> Option<&PolicyDocument> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, document)| document)
    }

    /// One `{id, title}` entry per document, in insertion order.
    pub fn list(&self) -> Vec<PolicyListItem> {
        self.entries
            .iter()
            .map(|(id, document)| PolicyListItem {
                id: id.clone(),
                title: document.title.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
