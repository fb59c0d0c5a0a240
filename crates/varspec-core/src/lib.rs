//! Core library for the varspec toolkit.
//!
//! Provides the plain-text [`layout`] helpers used to render help text and
//! embedded comments, along with the pieces the `varspec` CLI builds on:
//! embedded specification templates, their rendering, and a spec file writer
//! that never overwrites existing files.
//!
//! Every function in [`layout`] is pure and safe to call from any thread.

pub mod error;
pub mod layout;
pub mod spec_file;
pub mod templates;

pub use error::{Result, VarSpecError};
