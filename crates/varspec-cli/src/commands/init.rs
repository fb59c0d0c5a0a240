use std::path::PathBuf;

use anyhow::Result;

use varspec_core::layout;
use varspec_core::spec_file;
use varspec_core::templates::{warning_message, SpecFormat, COMMENT_WIDTH};

use crate::output;

/// Write an example secure variable specification.
///
/// Uses `filename` when given, otherwise the default name for `format`. Fails
/// without touching anything if the target already exists. Unless `quiet`,
/// reminds the user about dotted item keys and reports where the file went.
pub async fn run(filename: Option<&str>, format: SpecFormat, quiet: bool) -> Result<PathBuf> {
    let path = PathBuf::from(filename.unwrap_or(format.default_file_name()));
    tracing::info!("writing {format} specification to {}", path.display());

    let contents = spec_file::render(format)?;
    spec_file::write_new(&path, &contents)?;

    if !quiet {
        output::print_warning(&layout::wrap(&warning_message(), COMMENT_WIDTH)?);
        output::print_success(&format!(
            "Example secure variable specification written to {}",
            path.display()
        ));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use varspec_core::VarSpecError;

    #[tokio::test]
    async fn test_init_writes_hcl_to_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("custom.hcl");

        let written = run(target.to_str(), SpecFormat::Hcl, true).await.unwrap();
        assert_eq!(written, target);

        let contents = std::fs::read_to_string(&target).unwrap();
        assert!(contents.contains("Namespace = \"default\""));
        assert!(contents.contains("# REMINDER: While keys"));
    }

    #[tokio::test]
    async fn test_init_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("spec.json");

        run(target.to_str(), SpecFormat::Json, true).await.unwrap();
        let contents = std::fs::read_to_string(&target).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert!(value["Items"].is_object());
    }

    #[tokio::test]
    async fn test_init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("spec.nsv.hcl");
        std::fs::write(&target, "keep me").unwrap();

        let err = run(target.to_str(), SpecFormat::Hcl, true).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VarSpecError>(),
            Some(VarSpecError::FileExists(_))
        ));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "keep me");
    }
}
