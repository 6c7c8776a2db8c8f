//! Pipeline orchestrator.

use std::path::Path;

use modelc_core::ensure_dir;
use modelc_manifest::Metadata;

use super::{CompilationContext, CompileOutcome, Stage};
use crate::{
    config::CompilerConfig,
    dictionary::Dictionary,
    error::{Error, GenerationError, Result},
    header::insert_header,
    logger::{Logger, TracingLogger},
    model_info::ModelInfo,
    paths,
    plugin_version::PluginVersion,
    templates::{TemplateKind, TemplateRenderer},
    tools::{
        Invocation, SystemRunner, ToolRunner, bindings_invocation, lint_invocation,
        list_schema_files, run_tool, tree_invocation,
    },
};

/// Compiles model directories into plugin projects.
///
/// A compile runs the stages in [`Stage::ALL`] order and stops at the first
/// failure. Files already written by earlier stages are left in place.
///
/// # Example
///
/// ```ignore
/// let compiler = Compiler::new(CompilerConfig::default());
/// let outcome = compiler.compile("models/devicesim-1.0.0")?;
///
/// for artifact in &outcome.artifacts {
///     println!("wrote {}", artifact.display());
/// }
/// ```
pub struct Compiler {
    config: CompilerConfig,
    renderer: TemplateRenderer,
    runner: Box<dyn ToolRunner>,
    logger: Box<dyn Logger>,
}

impl Compiler {
    /// A compiler that spawns real tools and logs through `tracing`.
    pub fn new(config: CompilerConfig) -> Self {
        let renderer = match config.template_override_dir() {
            Some(dir) => TemplateRenderer::new().with_override_dir(dir),
            None => TemplateRenderer::new(),
        };

        Self {
            config,
            renderer,
            runner: Box::new(SystemRunner),
            logger: Box::new(TracingLogger),
        }
    }

    /// Replace the process runner.
    pub fn runner(mut self, runner: impl ToolRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    /// Replace the logger.
    pub fn logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile the model rooted at `model_dir`.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure; [`Error::stage`] tells which one.
    /// A missing or unreadable `VERSION` file is not an error: the default
    /// version is used and the reason is returned in
    /// [`CompileOutcome::version_warning`].
    pub fn compile(&self, model_dir: impl AsRef<Path>) -> Result<CompileOutcome> {
        let model_dir = model_dir.as_ref();
        self.logger
            .info(&format!("Compiling config model at '{}'", model_dir.display()));

        let metadata = self.run_stage(Stage::LoadMetadata, || self.load_metadata(model_dir))?;
        let plugin_version = self.resolve_version(model_dir);
        let mut ctx = CompilationContext::new(model_dir, metadata, plugin_version);

        if ctx.metadata.lint_model {
            self.run_stage(Stage::Lint, || self.lint(&ctx))?;
        } else {
            self.logger.debug("Linting disabled for this model");
        }

        let dictionary =
            self.run_stage(Stage::BuildDictionary, || Ok(self.build_dictionary(&ctx)))?;
        self.run_stage(Stage::GenerateBindings, || self.generate_bindings(&mut ctx))?;
        self.run_stage(Stage::GenerateTree, || self.generate_tree(&mut ctx))?;
        self.run_stage(Stage::RenderTemplates, || {
            self.render_templates(&mut ctx, &dictionary)
        })?;

        Ok(ctx.into_outcome(dictionary))
    }

    /// Build the dictionary a compile would render with, running no tools
    /// and writing nothing.
    pub fn describe(&self, model_dir: impl AsRef<Path>) -> Result<Dictionary> {
        let model_dir = model_dir.as_ref();
        let metadata = self.run_stage(Stage::LoadMetadata, || self.load_metadata(model_dir))?;
        let plugin_version = self.resolve_version(model_dir);
        let ctx = CompilationContext::new(model_dir, metadata, plugin_version);
        Ok(self.build_dictionary(&ctx))
    }

    /// Run one stage, logging its failure with the full cause chain.
    fn run_stage<T>(&self, stage: Stage, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.logger.debug(&format!("Stage {}: {}", stage, stage.description()));
        f().inspect_err(|e| self.logger.error(&e.chain()))
    }

    fn load_metadata(&self, model_dir: &Path) -> Result<Metadata> {
        self.logger.info("Loading model metadata");
        Ok(Metadata::load(model_dir)?)
    }

    fn resolve_version(&self, model_dir: &Path) -> PluginVersion {
        self.logger.info("Resolving plugin version");
        let version = PluginVersion::resolve(model_dir);
        match version.warning() {
            Some(warning) => self.logger.warn(&format!(
                "{}, using default plugin version {}",
                crate::error::error_chain(warning),
                version.as_str()
            )),
            None => self
                .logger
                .debug(&format!("Plugin version {}", version.as_str())),
        }
        version
    }

    fn lint(&self, ctx: &CompilationContext) -> Result<()> {
        self.logger.info("Linting YANG files");
        let invocation = lint_invocation(self.config.linter_program(), &ctx.model_dir, &ctx.metadata);
        self.run(&invocation).map_err(Error::Lint)
    }

    fn build_dictionary(&self, ctx: &CompilationContext) -> Dictionary {
        self.logger.info("Building template dictionary");
        let model_info = ModelInfo::from_metadata(&ctx.metadata);
        Dictionary::new(&ctx.metadata, &model_info, &ctx.plugin_version)
    }

    fn generate_bindings(&self, ctx: &mut CompilationContext) -> Result<()> {
        let output = paths::bindings_file(&ctx.model_dir);
        self.logger
            .info(&format!("Generating YANG bindings '{}'", output.display()));

        let api_dir = paths::api_dir(&ctx.model_dir);
        ensure_dir(&api_dir).map_err(|source| {
            Error::Generation(GenerationError::CreateDir {
                path: api_dir.clone(),
                source,
            })
        })?;

        let yang_dir = paths::yang_dir(&ctx.model_dir);
        let schema_files = list_schema_files(&yang_dir).map_err(|source| {
            Error::Generation(GenerationError::ListSchemas {
                path: yang_dir.clone(),
                source,
            })
        })?;

        let invocation = bindings_invocation(
            self.config.generator_program(),
            &ctx.model_dir,
            self.config.bindings_package(),
            &schema_files,
        );
        self.run(&invocation).map_err(|e| Error::Generation(e.into()))?;

        insert_header(&output)?;
        ctx.record(output);
        Ok(())
    }

    fn generate_tree(&self, ctx: &mut CompilationContext) -> Result<()> {
        self.logger.info("Generating YANG tree");
        let invocation = tree_invocation(self.config.linter_program(), &ctx.model_dir, &ctx.metadata);
        self.run(&invocation).map_err(Error::Tree)?;

        let tree = paths::tree_file(&ctx.model_dir, &ctx.metadata.name);
        if tree.is_file() {
            ctx.record(tree);
        } else {
            self.logger.warn(&format!(
                "'{}' exited successfully but did not write '{}'",
                invocation.program,
                tree.display()
            ));
        }
        Ok(())
    }

    fn render_templates(
        &self,
        ctx: &mut CompilationContext,
        dictionary: &Dictionary,
    ) -> Result<()> {
        for kind in TemplateKind::ALL {
            let destination = kind.destination(&ctx.model_dir);
            self.logger.info(&format!(
                "Generating {} '{}'",
                kind,
                destination.display()
            ));
            let written = self
                .renderer
                .render_to(kind, dictionary, &ctx.model_dir)
                .map_err(Error::Render)?;
            ctx.record(written);
        }
        Ok(())
    }

    fn run(&self, invocation: &Invocation) -> std::result::Result<(), crate::error::ToolError> {
        let invocation = invocation.clone().envs(self.config.tool_env());
        run_tool(self.runner.as_ref(), self.logger.as_ref(), &invocation)
    }
}
