//! Fetch intent and render-state machine

use policy_model::{PolicyDocument, PolicyListItem};

use crate::client::PolicyClient;

/// What the viewer intends to fetch, derived from the navigation path
/// exactly once per load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIntent {
    /// Empty path remainder: fetch the full listing.
    List,
    /// Non-empty remainder, treated as a lookup key.
    Policy(String),
}

impl ViewIntent {
    /// Strip leading and trailing slashes; whatever remains decides the
    /// intent.
    pub fn from_path(path: &str) -> Self {
        let key = path.trim_matches('/');
        if key.is_empty() {
            ViewIntent::List
        } else {
            ViewIntent::Policy(key.to_string())
        }
    }
}

/// Mutually exclusive render states.
///
/// The viewer transitions out of `Loading` exactly once per load; there is
/// no re-fetch within a view. An empty listing is rendered as the neutral
/// "no policies" message rather than an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Detail(PolicyDocument),
    List(Vec<PolicyListItem>),
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl ViewState {
    /// Resolve `intent` against the service. Every failure becomes the
    /// `Error` state; nothing propagates out of the viewer.
    pub async fn load(client: &PolicyClient, intent: &ViewIntent) -> ViewState {
        match intent {
            ViewIntent::Policy(key) => match client.fetch_policy(key).await {
                Ok(document) => ViewState::Detail(document),
                Err(e) => ViewState::Error(e.to_string()),
            },
            ViewIntent::List => match client.fetch_policy_list().await {
                Ok(items) => ViewState::List(items),
                Err(e) => ViewState::Error(e.to_string()),
            },
        }
    }
}
