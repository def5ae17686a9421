//! # Policy Data Model
//!
//! Shared types for the policy content service and its viewer. A policy
//! document is immutable once constructed: the server builds its registry at
//! startup and never mutates it, and the viewer only ever reads.
//!
//! Section content is operator-authored HTML and is trusted by design: the
//! viewer injects it into the rendered document verbatim. Any future content
//! source that accepts user-supplied markup must add a sanitization step
//! before reusing that render path.

use serde::{Deserialize, Serialize};

/// One titled block of rich-text content within a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySection {
    pub title: String,
    /// Operator-authored HTML, rendered verbatim by the viewer.
    pub content: String,
}

/// A complete policy document as served by `GET /privacy/:key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    pub title: String,
    /// Free-form display string; never parsed as a date.
    pub effective_date: String,
    /// Rendered top to bottom in this order.
    pub sections: Vec<PolicySection>,
}

/// Projection of a document for the `GET /privacy/all` listing.
///
/// `id` is the registry lookup key and doubles as the URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyListItem {
    pub id: String,
    pub title: String,
}
