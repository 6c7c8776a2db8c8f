//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{
    Error, Metadata, Result, error::SourceContext, metadata::METADATA_FILE,
    validate::validate_metadata,
};

impl FromStr for Metadata {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_metadata(s, METADATA_FILE)
    }
}

impl Metadata {
    /// Parse a manifest file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_metadata(&content, &path.display().to_string())
    }

    /// Load the manifest of the model rooted at `model_dir`.
    pub fn load(model_dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_file(model_dir.as_ref().join(METADATA_FILE))
    }

    /// Parse a manifest from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_metadata(content, filename)
    }
}

/// Parse and validate manifest content.
pub fn parse_metadata(content: &str, filename: &str) -> Result<Metadata> {
    let ctx = SourceContext::new(content, filename);
    let metadata: Metadata = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_metadata(&metadata, &ctx)?;
    Ok(metadata)
}
