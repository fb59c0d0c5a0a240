//! Template system for secure variable specification scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! - `{{warning}}` — the dotted-key reminder, wrapped at [`COMMENT_WIDTH`] and
//!   commented out with [`COMMENT_PREFIX`] (HCL only)
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.

pub mod embedded;
pub mod renderer;

use std::fmt;

use crate::layout;

/// Default file name for an HCL specification.
pub const DEFAULT_HCL_NAME: &str = "spec.nsv.hcl";

/// Default file name for a JSON specification.
pub const DEFAULT_JSON_NAME: &str = "spec.nsv.json";

/// Column width for comments embedded in generated files and for terminal notices.
pub const COMMENT_WIDTH: usize = 70;

/// Line prefix that turns text into an HCL comment.
pub const COMMENT_PREFIX: &str = "# ";

const WARN_DOTTED_KEYS: &str = "
	REMINDER: While keys in the 'Items' collection can contain dots, using
	them in templates is easier when they do not. As a best practice, avoid
	dotted keys when possible.";

/// Output format of a generated specification file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
    #[default]
    Hcl,
    Json,
}

impl SpecFormat {
    /// Lowercase name, as used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hcl => "hcl",
            Self::Json => "json",
        }
    }

    /// File name used when the caller does not pick one.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Hcl => DEFAULT_HCL_NAME,
            Self::Json => DEFAULT_JSON_NAME,
        }
    }

    /// Raw (unrendered) template body.
    pub fn template(&self) -> &'static str {
        match self {
            Self::Hcl => embedded::HCL_SPEC,
            Self::Json => embedded::JSON_SPEC,
        }
    }
}

impl fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dotted-key reminder as a single tidy line, ready to be re-wrapped.
pub fn warning_message() -> String {
    layout::tidy(WARN_DOTTED_KEYS)
}
