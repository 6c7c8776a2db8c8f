//! Test doubles for the compiler's capabilities.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::{HashMap, HashSet},
    fmt::Write as _,
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use modelc_manifest::{GetStateMode, METADATA_FILE, Metadata, ModuleDescriptor};
use tracing::Level;

use crate::{
    logger::Logger,
    paths,
    tools::{Invocation, ToolRunner, ToolStatus},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
struct RecorderState {
    invocations: Vec<Invocation>,
    failures: HashMap<String, i32>,
    missing: HashSet<String>,
    silent: HashSet<String>,
}

/// A [`ToolRunner`] that records invocations instead of spawning processes.
///
/// Successful runs emulate the files the real tools would leave behind:
/// a `-output_file=<path>` argument gets a small Go file and a `-o <path>`
/// pair gets a schema tree. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    state: Arc<Mutex<RecorderState>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every run of `program` exit with `code`.
    pub fn fail_with(self, program: &str, code: i32) -> Self {
        lock(&self.state).failures.insert(program.to_string(), code);
        self
    }

    /// Make every run of `program` fail to spawn.
    pub fn missing(self, program: &str) -> Self {
        lock(&self.state).missing.insert(program.to_string());
        self
    }

    /// Make every run of `program` succeed without writing its outputs.
    pub fn without_outputs(self, program: &str) -> Self {
        lock(&self.state).silent.insert(program.to_string());
        self
    }

    /// Everything run so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        lock(&self.state).invocations.clone()
    }

    /// Invocations of one program, in order.
    pub fn invocations_of(&self, program: &str) -> Vec<Invocation> {
        lock(&self.state)
            .invocations
            .iter()
            .filter(|inv| inv.program == program)
            .cloned()
            .collect()
    }
}

impl ToolRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolStatus> {
        let mut state = lock(&self.state);
        state.invocations.push(invocation.clone());

        if state.missing.contains(&invocation.program) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: command not found", invocation.program),
            ));
        }
        if let Some(code) = state.failures.get(&invocation.program) {
            return Ok(ToolStatus::exited(*code));
        }
        if state.silent.contains(&invocation.program) {
            return Ok(ToolStatus::exited(0));
        }

        drop(state);
        emulate_outputs(invocation)?;
        Ok(ToolStatus::exited(0))
    }
}

fn emulate_outputs(invocation: &Invocation) -> io::Result<()> {
    let mut args = invocation.args.iter();
    while let Some(arg) = args.next() {
        if let Some(path) = arg.strip_prefix("-output_file=") {
            fs::write(path, "package api\n")?;
        } else if arg == "-o" {
            if let Some(path) = args.next() {
                fs::write(path, "module: emulated\n")?;
            }
        }
    }
    Ok(())
}

/// A [`Logger`] that keeps every message in memory.
#[derive(Debug, Clone, Default)]
pub struct CapturingLogger {
    entries: Arc<Mutex<Vec<(Level, String)>>>,
}

impl CapturingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        lock(&self.entries).clone()
    }

    /// Messages logged at exactly `level`.
    pub fn messages(&self, level: Level) -> Vec<String> {
        lock(&self.entries)
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        lock(&self.entries).iter().any(|(_, m)| m.contains(needle))
    }
}

impl Logger for CapturingLogger {
    fn log(&self, level: Level, message: &str) {
        lock(&self.entries).push((level, message.to_string()));
    }
}

/// Metadata for model `name` made of `modules`.
///
/// Each module is published by ONF at revision `2020-01-01` from
/// `<module>.yang`; the model is version `1.0.0` with linting disabled.
pub fn metadata_with_modules(name: &str, modules: &[&str]) -> Metadata {
    Metadata {
        name: name.to_string(),
        version: "1.0.0".to_string(),
        go_package: format!("github.com/onosproject/config-models/{}", name),
        lint_model: false,
        get_state_mode: GetStateMode::None,
        modules: modules
            .iter()
            .map(|module| ModuleDescriptor {
                name: module.to_string(),
                organization: "ONF".to_string(),
                revision: "2020-01-01".to_string(),
                yang_file: format!("{}.yang", module),
            })
            .collect(),
    }
}

/// Render metadata as the manifest text that would load back into it.
pub fn manifest_text(metadata: &Metadata) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "name = {:?}", metadata.name);
    let _ = writeln!(out, "version = {:?}", metadata.version);
    let _ = writeln!(out, "go_package = {:?}", metadata.go_package);
    let _ = writeln!(out, "lint = {}", metadata.lint_model);
    let _ = writeln!(out, "get_state_mode = {:?}", metadata.get_state_mode.as_str());
    for module in &metadata.modules {
        let _ = writeln!(out, "\n[[modules]]");
        let _ = writeln!(out, "name = {:?}", module.name);
        let _ = writeln!(out, "organization = {:?}", module.organization);
        let _ = writeln!(out, "revision = {:?}", module.revision);
        let _ = writeln!(out, "file = {:?}", module.yang_file);
    }
    out
}

/// Lay out a model directory under `root`: the manifest plus one stub
/// YANG source per module. Returns the model directory.
pub fn write_model(root: &Path, metadata: &Metadata) -> io::Result<PathBuf> {
    let model_dir = root.join(&metadata.name);
    let yang_dir = paths::yang_dir(&model_dir);
    fs::create_dir_all(&yang_dir)?;
    fs::write(model_dir.join(METADATA_FILE), manifest_text(metadata))?;
    for module in &metadata.modules {
        fs::write(
            yang_dir.join(&module.yang_file),
            format!("module {} {{\n  prefix {};\n}}\n", module.name, module.name),
        )?;
    }
    Ok(model_dir)
}
