//! Handlebars-based template renderer for file scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and HTML
//! escaping turned off. Strict mode makes any `{{variable}}` missing from the data
//! context an error instead of an empty string, so a generator that forgets a field
//! fails at generation time rather than writing a CMake or C file with holes in it.
//! Escaping is off because the output is C and CMake, where `"` and `<` must survive.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "module": "ez_queue" });
//! let output = renderer.render(embedded::UNITTEST_SOURCE, &data)?;
//! ```

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{EzgenError, Result};

/// Template renderer using Handlebars for generating project files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| EzgenError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
