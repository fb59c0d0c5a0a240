//! Compile-time embedded templates for specification scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/varspec-core/src/templates/embedded.rs`).
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT modify template files without checking that the Handlebars variables still match
//! what [`crate::spec_file::render`] passes in.

// -------------------------------------------------------
// Secure variable specification templates
// -------------------------------------------------------

/// HCL specification. Expects a `{{warning}}` comment block.
pub const HCL_SPEC: &str = include_str!("../../../../templates/spec/spec.nsv.hcl.tmpl");

/// JSON specification. Takes no variables.
pub const JSON_SPEC: &str = include_str!("../../../../templates/spec/spec.nsv.json.tmpl");
