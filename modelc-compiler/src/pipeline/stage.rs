//! Compilation stages.

use std::fmt;

/// A step of the compile, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    LoadMetadata,
    ResolveVersion,
    Lint,
    BuildDictionary,
    GenerateBindings,
    GenerateTree,
    RenderTemplates,
}

impl Stage {
    /// All stages, in execution order. [`Stage::Lint`] is skipped for
    /// models that do not ask for it.
    pub const ALL: [Stage; 7] = [
        Stage::LoadMetadata,
        Stage::ResolveVersion,
        Stage::Lint,
        Stage::BuildDictionary,
        Stage::GenerateBindings,
        Stage::GenerateTree,
        Stage::RenderTemplates,
    ];

    /// Short kebab-case name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Stage::LoadMetadata => "load-metadata",
            Stage::ResolveVersion => "resolve-version",
            Stage::Lint => "lint",
            Stage::BuildDictionary => "build-dictionary",
            Stage::GenerateBindings => "generate-bindings",
            Stage::GenerateTree => "generate-tree",
            Stage::RenderTemplates => "render-templates",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Stage::LoadMetadata => "Read and validate the model manifest",
            Stage::ResolveVersion => "Read the plugin version marker",
            Stage::Lint => "Check the YANG sources with the linter",
            Stage::BuildDictionary => "Assemble the template rendering context",
            Stage::GenerateBindings => "Generate Go bindings from the YANG sources",
            Stage::GenerateTree => "Write the human-readable schema tree",
            Stage::RenderTemplates => "Render the plugin project files",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
