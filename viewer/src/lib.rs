//! Policy Viewer
//!
//! Derives a fetch intent from a navigation path, performs one request
//! against the policy content service, and renders the outcome as an HTML
//! document through one of four mutually exclusive view states.

pub mod client;
pub mod render;
pub mod view;
