//! CLI command implementations for varspec.
//!
//! Each module corresponds to a subcommand (`varspec <command>`).

pub mod init;
pub mod wrap;
