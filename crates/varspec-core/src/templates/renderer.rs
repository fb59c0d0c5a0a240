//! Handlebars-based template renderer for specification files.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled, so any
//! `{{variable}}` referenced in a template must be present in the data context.
//! HTML escaping is turned off: the output is HCL or JSON, not markup, and a quote
//! in a comment must stay a quote.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "warning": "# REMINDER: ..." });
//! let output = renderer.render(embedded::HCL_SPEC, &data)?;
//! ```

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{Result, VarSpecError};

/// Template renderer using Handlebars for generating specification files.
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
            .map_err(|e| VarSpecError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
