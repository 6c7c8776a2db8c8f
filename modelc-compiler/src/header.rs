//! Generated-code marker for the binding file.

use std::{fs, path::Path};

use modelc_core::{prepend_header, replace_file};

use crate::error::{Error, Result};

/// Prefix the file at `path` with the generated-code marker.
///
/// The file is rewritten atomically; if anything fails the original
/// content stays in place.
pub fn insert_header(path: &Path) -> Result<()> {
    let rewrite = |source| Error::HeaderRewrite {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read(path).map_err(rewrite)?;
    replace_file(path, prepend_header(&content)).map_err(rewrite)
}

#[cfg(test)]
mod tests {
    use modelc_core::GENERATED_HEADER;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_marker_plus_original() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("generated.go");
        fs::write(&path, "package api\n").unwrap();

        insert_header(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{}package api\n", GENERATED_HEADER));
        assert_eq!(content.len(), GENERATED_HEADER.len() + "package api\n".len());
    }

    #[test]
    fn test_missing_file_is_header_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("generated.go");

        let err = insert_header(&path).unwrap_err();

        assert!(matches!(err, Error::HeaderRewrite { .. }));
        assert!(!path.exists());
    }
}
