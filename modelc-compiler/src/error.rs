use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{pipeline::Stage, templates::TemplateKind, tools::ToolStatus};

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A fatal compilation failure.
///
/// Every variant belongs to exactly one [`Stage`]; the first one raised
/// aborts the compile and is handed back to the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read model metadata")]
    Manifest(#[source] Box<modelc_manifest::Error>),

    #[error("YANG files contain issues")]
    Lint(#[source] ToolError),

    #[error("unable to generate Golang bindings")]
    Generation(#[source] GenerationError),

    #[error("unable to insert generated-code header into '{path}'")]
    HeaderRewrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to generate YANG model tree")]
    Tree(#[source] ToolError),

    #[error("unable to generate model plugin artifacts")]
    Render(#[source] RenderError),
}

impl Error {
    /// The stage that raised this error.
    pub fn stage(&self) -> Stage {
        match self {
            Error::Manifest(_) => Stage::LoadMetadata,
            Error::Lint(_) => Stage::Lint,
            Error::Generation(_) | Error::HeaderRewrite { .. } => Stage::GenerateBindings,
            Error::Tree(_) => Stage::GenerateTree,
            Error::Render(_) => Stage::RenderTemplates,
        }
    }

    /// The manifest diagnostic, if this is a manifest failure.
    pub fn manifest_error(&self) -> Option<&modelc_manifest::Error> {
        match self {
            Error::Manifest(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Render the error and all of its sources as `outer: inner: ...`.
    pub fn chain(&self) -> String {
        error_chain(self)
    }
}

impl From<Box<modelc_manifest::Error>> for Error {
    fn from(e: Box<modelc_manifest::Error>) -> Self {
        Error::Manifest(e)
    }
}

/// Failure to run an external tool to a clean exit.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to execute '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' {status}")]
    Failed { program: String, status: ToolStatus },
}

/// Failure while producing the Go bindings.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("unable to create output directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to list YANG files in '{path}'")]
    ListSchemas {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// Failure to materialize one template.
#[derive(Debug, Error)]
#[error("unable to render {kind} template")]
pub struct RenderError {
    pub kind: TemplateKind,
    #[source]
    pub cause: RenderCause,
}

/// What went wrong while rendering a template.
#[derive(Debug, Error)]
pub enum RenderCause {
    #[error("unable to read template '{path}'")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template substitution failed")]
    Substitute(#[source] Box<handlebars::RenderError>),

    #[error("unable to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The plugin version could not be read; the default was used instead.
///
/// This never aborts a compile. It is surfaced as a warning.
#[derive(Debug, Error)]
pub enum VersionReadError {
    #[error("unable to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' does not start with a version")]
    Empty { path: PathBuf },
}

/// Join an error and its `source()` chain with `": "`.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_mapping() {
        let lint = Error::Lint(ToolError::Failed {
            program: "pyang".into(),
            status: ToolStatus::exited(1),
        });
        assert_eq!(lint.stage(), Stage::Lint);

        let header = Error::HeaderRewrite {
            path: PathBuf::from("api/generated.go"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(header.stage(), Stage::GenerateBindings);

        let tree = Error::Tree(ToolError::Spawn {
            program: "pyang".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        assert_eq!(tree.stage(), Stage::GenerateTree);
    }

    #[test]
    fn test_chain_includes_causes() {
        let err = Error::Generation(GenerationError::Tool(ToolError::Failed {
            program: "generator".into(),
            status: ToolStatus::exited(2),
        }));
        assert_eq!(
            err.chain(),
            "unable to generate Golang bindings: 'generator' exited with status 2"
        );
    }

    #[test]
    fn test_version_read_error_display() {
        let err = VersionReadError::Empty {
            path: PathBuf::from("VERSION"),
        };
        assert_eq!(err.to_string(), "'VERSION' does not start with a version");
    }
}
