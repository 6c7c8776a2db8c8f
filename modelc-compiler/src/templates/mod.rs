//! Plugin project templates.
//!
//! Five fixed templates are rendered against a [`Dictionary`]. Each has a
//! built-in source compiled into the binary; a template directory can
//! replace any of them with a same-named `.tpl` file.

use std::{
    borrow::Cow,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use handlebars::{Handlebars, handlebars_helper};
use modelc_core::write_file;

use crate::{
    dictionary::Dictionary,
    error::{RenderCause, RenderError},
    paths,
};

/// One of the generated plugin project files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// `plugin/main.go`
    Main,
    /// `plugin/paths.go`
    Paths,
    /// `go.mod`
    GoMod,
    Makefile,
    Dockerfile,
}

impl TemplateKind {
    /// All kinds, in rendering order.
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Main,
        TemplateKind::Paths,
        TemplateKind::GoMod,
        TemplateKind::Makefile,
        TemplateKind::Dockerfile,
    ];

    /// File name of the template source.
    pub fn source_name(self) -> &'static str {
        match self {
            TemplateKind::Main => "main.go.tpl",
            TemplateKind::Paths => "paths.go.tpl",
            TemplateKind::GoMod => "go.mod.tpl",
            TemplateKind::Makefile => "Makefile.tpl",
            TemplateKind::Dockerfile => "Dockerfile.tpl",
        }
    }

    /// Built-in template source.
    pub fn embedded(self) -> &'static str {
        match self {
            TemplateKind::Main => include_str!("../../templates/main.go.tpl"),
            TemplateKind::Paths => include_str!("../../templates/paths.go.tpl"),
            TemplateKind::GoMod => include_str!("../../templates/go.mod.tpl"),
            TemplateKind::Makefile => include_str!("../../templates/Makefile.tpl"),
            TemplateKind::Dockerfile => include_str!("../../templates/Dockerfile.tpl"),
        }
    }

    /// Where the rendered file goes inside the model directory.
    pub fn destination(self, model_dir: &Path) -> PathBuf {
        match self {
            TemplateKind::Main => paths::plugin_dir(model_dir).join("main.go"),
            TemplateKind::Paths => paths::plugin_dir(model_dir).join("paths.go"),
            TemplateKind::GoMod => model_dir.join("go.mod"),
            TemplateKind::Makefile => model_dir.join("Makefile"),
            TemplateKind::Dockerfile => model_dir.join("Dockerfile"),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateKind::Main => "plugin main",
            TemplateKind::Paths => "plugin paths extraction utility",
            TemplateKind::GoMod => "plugin Go module",
            TemplateKind::Makefile => "plugin Makefile",
            TemplateKind::Dockerfile => "plugin Dockerfile",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// Go accepts JSON string syntax as an interpreted string literal.
handlebars_helper!(quote: |value: str| serde_json::to_string(value).unwrap_or_default());

/// Renders [`TemplateKind`]s against a [`Dictionary`].
///
/// Rendering is strict: a reference to a field the dictionary does not
/// have is an error rather than an empty string. Output is not
/// HTML-escaped.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
    override_dir: Option<PathBuf>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("quote", Box::new(quote));

        Self {
            registry,
            override_dir: None,
        }
    }

    /// Prefer `<dir>/<kind>.tpl` over the built-in source when it exists.
    pub fn with_override_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.override_dir = Some(dir.into());
        self
    }

    /// The template text for `kind`.
    pub fn source(&self, kind: TemplateKind) -> Result<Cow<'static, str>, RenderError> {
        let Some(dir) = &self.override_dir else {
            return Ok(Cow::Borrowed(kind.embedded()));
        };

        let path = dir.join(kind.source_name());
        match fs::read_to_string(&path) {
            Ok(source) => Ok(Cow::Owned(source)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Cow::Borrowed(kind.embedded())),
            Err(source) => Err(RenderError {
                kind,
                cause: RenderCause::ReadTemplate { path, source },
            }),
        }
    }

    /// Render `kind` to a string.
    pub fn render(&self, kind: TemplateKind, dictionary: &Dictionary) -> Result<String, RenderError> {
        let source = self.source(kind)?;
        self.registry
            .render_template(&source, dictionary)
            .map_err(|e| RenderError {
                kind,
                cause: RenderCause::Substitute(Box::new(e)),
            })
    }

    /// Render `kind` and write it to its destination under `model_dir`,
    /// creating parent directories and replacing any existing file.
    pub fn render_to(
        &self,
        kind: TemplateKind,
        dictionary: &Dictionary,
        model_dir: &Path,
    ) -> Result<PathBuf, RenderError> {
        let rendered = self.render(kind, dictionary)?;
        let path = kind.destination(model_dir);
        write_file(&path, rendered).map_err(|source| RenderError {
            kind,
            cause: RenderCause::Write {
                path: path.clone(),
                source,
            },
        })?;
        Ok(path)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("override_dir", &self.override_dir)
            .finish_non_exhaustive()
    }
}
