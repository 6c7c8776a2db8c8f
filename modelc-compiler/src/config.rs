//! Compiler settings.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Default linter and tree generator.
pub const DEFAULT_LINTER: &str = "pyang";

/// Default Go binding generator.
pub const DEFAULT_GENERATOR: &str = "generator";

/// Default package name for the generated bindings.
pub const DEFAULT_PACKAGE_NAME: &str = "api";

/// Settings for a [`Compiler`](crate::Compiler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    linter: String,
    generator: String,
    package_name: String,
    template_dir: Option<PathBuf>,
    env: IndexMap<String, String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            linter: DEFAULT_LINTER.to_string(),
            generator: DEFAULT_GENERATOR.to_string(),
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            template_dir: None,
            env: IndexMap::new(),
        }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Program used for linting and tree output.
    pub fn linter(mut self, program: impl Into<String>) -> Self {
        self.linter = program.into();
        self
    }

    /// Program used to generate the Go bindings.
    pub fn generator(mut self, program: impl Into<String>) -> Self {
        self.generator = program.into();
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = name.into();
        self
    }

    /// Directory of `<kind>.tpl` files that replace the built-in templates.
    pub fn template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    /// Set a variable for every tool run, on top of the inherited environment.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn linter_program(&self) -> &str {
        &self.linter
    }

    pub fn generator_program(&self) -> &str {
        &self.generator
    }

    pub fn bindings_package(&self) -> &str {
        &self.package_name
    }

    pub fn template_override_dir(&self) -> Option<&Path> {
        self.template_dir.as_deref()
    }

    pub fn tool_env(&self) -> &IndexMap<String, String> {
        &self.env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompilerConfig::default();
        assert_eq!(config.linter_program(), "pyang");
        assert_eq!(config.generator_program(), "generator");
        assert_eq!(config.bindings_package(), "api");
        assert!(config.template_override_dir().is_none());
        assert!(config.tool_env().is_empty());
    }

    #[test]
    fn test_env_keeps_insertion_order_and_overrides() {
        let config = CompilerConfig::new()
            .env("GOPATH", "/go")
            .env("GOFLAGS", "-mod=mod")
            .env("GOPATH", "/opt/go");

        let vars: Vec<(&str, &str)> = config
            .tool_env()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(vars, [("GOPATH", "/opt/go"), ("GOFLAGS", "-mod=mod")]);
    }
}
