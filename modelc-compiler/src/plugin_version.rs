//! Plugin version lookup.

use std::{fs, path::Path};

use crate::{error::VersionReadError, paths};

/// Version used when the marker file cannot be read.
pub const DEFAULT_PLUGIN_VERSION: &str = "1.0.0";

/// The version stamped on the compiled plugin.
#[derive(Debug)]
pub struct PluginVersion {
    value: String,
    warning: Option<VersionReadError>,
}

impl PluginVersion {
    /// Read the first line of `<model>/VERSION`.
    ///
    /// This never fails. A missing, unreadable or empty marker yields
    /// [`DEFAULT_PLUGIN_VERSION`] and keeps the reason in [`Self::warning`]
    /// so the caller can log it and carry on.
    pub fn resolve(model_dir: &Path) -> Self {
        let path = model_dir.join(paths::VERSION_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => match first_line(&content) {
                Some(line) => Self::new(line),
                None => Self::defaulted(VersionReadError::Empty { path }),
            },
            Err(source) => Self::defaulted(VersionReadError::Io { path, source }),
        }
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            warning: None,
        }
    }

    fn defaulted(warning: VersionReadError) -> Self {
        Self {
            value: DEFAULT_PLUGIN_VERSION.to_string(),
            warning: Some(warning),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Why the default was used, if it was.
    pub fn warning(&self) -> Option<&VersionReadError> {
        self.warning.as_ref()
    }

    pub fn is_default(&self) -> bool {
        self.warning.is_some()
    }

    pub fn into_parts(self) -> (String, Option<VersionReadError>) {
        (self.value, self.warning)
    }
}

/// First line with `\r\n` treated as `\n`; `None` if it is blank.
fn first_line(content: &str) -> Option<&str> {
    let line = content.split('\n').next().unwrap_or_default();
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        None
    } else {
        Some(line)
    }
}
