//! Rendering and writing example specification files.
//!
//! [`write_new`] never overwrites: if anything already exists at the target
//! path the write is refused with [`VarSpecError::FileExists`].

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde_json::json;

use crate::error::{Result, VarSpecError};
use crate::layout;
use crate::templates::renderer::TemplateRenderer;
use crate::templates::{warning_message, SpecFormat, COMMENT_PREFIX, COMMENT_WIDTH};

/// Render the example specification for `format`.
///
/// The result is trimmed and ends with exactly one newline.
pub fn render(format: SpecFormat) -> Result<String> {
    let warning = layout::wrap_and_prefix(&warning_message(), COMMENT_WIDTH, COMMENT_PREFIX)?;
    let data = json!({ "warning": warning });

    let body = TemplateRenderer::new().render(format.template(), &data)?;
    Ok(format!("{}\n", body.trim()))
}

/// Create `path` and write `contents` to it, refusing to overwrite.
///
/// On Unix the file is created with mode `0o660` (before umask).
pub fn write_new(path: &Path, contents: &str) -> Result<()> {
    let exists = path.try_exists().map_err(|e| VarSpecError::StatFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    if exists {
        return Err(VarSpecError::FileExists(path.to_path_buf()));
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o660);
    }

    // create_new closes the gap between the existence check and the open
    let mut file = options.open(path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => VarSpecError::FileExists(path.to_path_buf()),
        _ => VarSpecError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    file.write_all(contents.as_bytes())
        .map_err(|e| VarSpecError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hcl_embeds_wrapped_warning() {
        let out = render(SpecFormat::Hcl).unwrap();
        assert!(out.starts_with("# A secure variable Path"));
        assert!(out.ends_with("}\n"));
        assert!(!out.contains("{{"));

        let warning: Vec<&str> = out
            .lines()
            .skip_while(|l| !l.starts_with("# REMINDER:"))
            .take_while(|l| l.starts_with("# "))
            .collect();
        assert!(warning.len() > 1);
        for line in &warning {
            assert!(line.chars().count() <= COMMENT_WIDTH + COMMENT_PREFIX.len());
        }
        assert!(warning.last().unwrap().ends_with("dotted keys when possible."));
        assert!(out.contains("'Items'"));
    }

    #[test]
    fn test_render_json_is_valid_json() {
        let out = render(SpecFormat::Json).unwrap();
        assert!(out.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["Items"]["key1"], "value 1");
        assert_eq!(value["Items"]["key2"], "value 2");
    }

    #[test]
    fn test_write_new_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.nsv.hcl");
        write_new(&path, "Items {}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Items {}\n");
    }

    #[test]
    fn test_write_new_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.nsv.json");
        std::fs::write(&path, "original").unwrap();

        let err = write_new(&path, "replacement").unwrap_err();
        assert!(matches!(err, VarSpecError::FileExists(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_write_new_missing_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("spec.nsv.hcl");
        let err = write_new(&path, "x").unwrap_err();
        assert!(matches!(err, VarSpecError::WriteFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_new_unreadable_parent_reports_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        let path = locked.join("spec.nsv.hcl");

        // root ignores directory permissions, so the stat succeeds there
        let stat = std::fs::metadata(&path);
        let denied = matches!(&stat, Err(e) if e.kind() == ErrorKind::PermissionDenied);
        let result = write_new(&path, "x");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        if denied {
            match result.unwrap_err() {
                VarSpecError::StatFailed { path: reported, .. } => assert_eq!(reported, path),
                other => panic!("expected StatFailed, got {other:?}"),
            }
            assert!(std::fs::metadata(&path).is_err());
        }
    }

    #[test]
    fn test_stat_failure_message_names_the_file() {
        let err = VarSpecError::StatFailed {
            path: "spec.nsv.hcl".into(),
            source: std::io::Error::from(ErrorKind::PermissionDenied),
        };
        assert_eq!(err.to_string(), "failed to stat \"spec.nsv.hcl\"");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_new_mode_is_not_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.nsv.hcl");
        write_new(&path, "x").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o007, 0);
    }
}
