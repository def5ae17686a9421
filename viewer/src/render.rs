//! HTML rendering for the view states
//!
//! Templates are Tera files under `viewer/templates/`. Section content is
//! operator-authored HTML and flows through the `safe` filter so it reaches
//! the document verbatim; every other value is escaped as usual.

use anyhow::{Context, Result};
use tera::Tera;

use crate::view::ViewState;

pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Load templates using a crate-absolute path for deterministic
    /// resolution.
    pub fn new() -> Result<Self> {
        let tpl_glob = format!("{}/templates/*.html", env!("CARGO_MANIFEST_DIR"));
        let tera = Tera::new(&tpl_glob)
            .with_context(|| format!("Failed to parse viewer templates ({})", tpl_glob))?;
        Ok(Self { tera })
    }

    /// Render `state` to a complete HTML document.
    pub fn render(&self, state: &ViewState) -> Result<String> {
        let mut context = tera::Context::new();
        let template = match state {
            ViewState::Loading => "loading.html",
            ViewState::Error(message) => {
                context.insert("message", message);
                "error.html"
            }
            ViewState::Detail(document) => {
                context.insert("policy", document);
                "detail.html"
            }
            ViewState::List(items) => {
                context.insert("policies", items);
                "list.html"
            }
        };

        self.tera
            .render(template, &context)
            .with_context(|| format!("Failed to render {}", template))
    }
}
