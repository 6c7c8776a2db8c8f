use std::{fs, path::Path};

use modelc_compiler::{
    Compiler, CompilerConfig, Stage, TemplateKind,
    testing::{CapturingLogger, RecordingRunner, manifest_text, metadata_with_modules, write_model},
};
use modelc_core::GENERATED_HEADER;
use tempfile::TempDir;

fn compiler(runner: &RecordingRunner) -> Compiler {
    Compiler::new(CompilerConfig::default())
        .runner(runner.clone())
        .logger(CapturingLogger::new())
}

fn rendered_outputs(model: &Path) -> Vec<String> {
    TemplateKind::ALL
        .iter()
        .map(|kind| fs::read_to_string(kind.destination(model)).unwrap())
        .collect()
}

#[test]
fn test_single_module_without_lint_or_version() {
    let temp = TempDir::new().unwrap();
    let model = write_model(temp.path(), &metadata_with_modules("foo", &["foo"])).unwrap();
    let runner = RecordingRunner::new();

    let outcome = compiler(&runner).compile(&model).unwrap();

    let bindings = fs::read_to_string(model.join("api/generated.go")).unwrap();
    assert!(bindings.starts_with(GENERATED_HEADER));
    assert!(model.join("foo.tree").is_file());
    for kind in TemplateKind::ALL {
        assert!(kind.destination(&model).is_file(), "{} not rendered", kind);
    }
    assert_eq!(outcome.dictionary.name, "foo");
    assert_eq!(outcome.dictionary.plugin_version, "1.0.0");
    assert_eq!(outcome.artifacts.len(), 7);

    let main = fs::read_to_string(model.join("plugin/main.go")).unwrap();
    assert!(main.contains("{Name: \"foo\", Organization: \"ONF\", Version: \"2020-01-01\"},"));
}

#[test]
fn test_failing_lint_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let mut metadata = metadata_with_modules("foo", &["foo", "bar"]);
    metadata.lint_model = true;
    let model = write_model(temp.path(), &metadata).unwrap();
    let runner = RecordingRunner::new().fail_with("pyang", 1);

    let err = compiler(&runner).compile(&model).unwrap_err();

    assert_eq!(err.stage(), Stage::Lint);
    assert_eq!(err.to_string(), "YANG files contain issues");
    assert_eq!(runner.invocations().len(), 1);
    assert!(!model.join("api/generated.go").exists());
    assert!(!model.join("foo.tree").exists());
    for kind in TemplateKind::ALL {
        assert!(!kind.destination(&model).exists());
    }
}

#[test]
fn test_missing_linter_fails_lint() {
    let temp = TempDir::new().unwrap();
    let mut metadata = metadata_with_modules("foo", &["foo"]);
    metadata.lint_model = true;
    let model = write_model(temp.path(), &metadata).unwrap();
    let runner = RecordingRunner::new().missing("pyang");

    let err = compiler(&runner).compile(&model).unwrap_err();

    assert_eq!(err.stage(), Stage::Lint);
    assert!(err.chain().contains("failed to execute 'pyang'"));
}

#[test]
fn test_generator_gets_every_schema_file_sorted() {
    let temp = TempDir::new().unwrap();
    let model = write_model(
        temp.path(),
        &metadata_with_modules("devicesim", &["devicesim", "openconfig-interfaces"]),
    )
    .unwrap();
    fs::write(model.join("yang/ietf-interfaces.yang"), "module ietf-interfaces {}").unwrap();
    let runner = RecordingRunner::new();

    compiler(&runner).compile(&model).unwrap();

    let generator = &runner.invocations_of("generator")[0];
    let positional: Vec<&str> = generator.args[5..].iter().map(String::as_str).collect();
    assert_eq!(
        positional,
        ["devicesim.yang", "ietf-interfaces.yang", "openconfig-interfaces.yang"]
    );

    let tree = &runner.invocations_of("pyang")[0];
    assert_eq!(tree.args.len(), 6 + 2);
    assert!(tree.args[6].ends_with("yang/devicesim.yang"));
    assert!(tree.args[7].ends_with("yang/openconfig-interfaces.yang"));
}

#[test]
fn test_recompile_is_deterministic() {
    let temp = TempDir::new().unwrap();
    let model = write_model(
        temp.path(),
        &metadata_with_modules("devicesim", &["devicesim", "openconfig-types"]),
    )
    .unwrap();
    fs::write(model.join("VERSION"), "0.4.2\n").unwrap();
    let runner = RecordingRunner::new();

    compiler(&runner).compile(&model).unwrap();
    let first = rendered_outputs(&model);
    compiler(&runner).compile(&model).unwrap();
    let second = rendered_outputs(&model);

    assert_eq!(first, second);
    assert!(first[3].contains("PLUGIN_VERSION := 0.4.2"));
}

#[test]
fn test_template_dir_override() {
    let temp = TempDir::new().unwrap();
    let model = write_model(temp.path(), &metadata_with_modules("foo", &["foo"])).unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(
        templates.join("Dockerfile.tpl"),
        "FROM scratch\nCOPY {{Name}}-{{PluginVersion}}.so /\n",
    )
    .unwrap();
    let compiler = Compiler::new(CompilerConfig::new().template_dir(&templates))
        .runner(RecordingRunner::new())
        .logger(CapturingLogger::new());

    compiler.compile(&model).unwrap();

    assert_eq!(
        fs::read_to_string(model.join("Dockerfile")).unwrap(),
        "FROM scratch\nCOPY foo-1.0.0.so /\n"
    );
    assert!(fs::read_to_string(model.join("go.mod")).unwrap().starts_with("module "));
}

#[test]
fn test_invalid_manifest_reports_diagnostic() {
    let temp = TempDir::new().unwrap();
    let model = temp.path().join("broken");
    fs::create_dir_all(&model).unwrap();
    fs::write(
        model.join("metadata.toml"),
        "name = \"broken\"\nversion = \"1.0.0\"\ngo_package = \"example.com/broken\"\n\n[[modules]]\nname = \"m\"\nrevision = \"June 2020\"\nfile = \"m.yang\"\n",
    )
    .unwrap();
    let runner = RecordingRunner::new();

    let err = compiler(&runner).compile(&model).unwrap_err();

    assert_eq!(err.stage(), Stage::LoadMetadata);
    assert!(matches!(
        err.manifest_error(),
        Some(modelc_manifest::Error::InvalidRevision { .. })
    ));
    assert!(runner.invocations().is_empty());
}

#[test]
fn test_render_failure_keeps_earlier_artifacts() {
    let temp = TempDir::new().unwrap();
    let model = write_model(temp.path(), &metadata_with_modules("foo", &["foo"])).unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("Dockerfile.tpl"), "FROM {{BaseImage}}\n").unwrap();
    let compiler = Compiler::new(CompilerConfig::new().template_dir(&templates))
        .runner(RecordingRunner::new())
        .logger(CapturingLogger::new());

    let err = compiler.compile(&model).unwrap_err();

    assert_eq!(err.stage(), Stage::RenderTemplates);
    for kept in [
        "api/generated.go",
        "foo.tree",
        "plugin/main.go",
        "plugin/paths.go",
        "go.mod",
        "Makefile",
    ] {
        assert!(model.join(kept).is_file(), "{} was removed", kept);
    }
    assert!(!model.join("Dockerfile").exists());
}

#[test]
fn test_model_name_cannot_escape_model_dir() {
    let temp = TempDir::new().unwrap();
    let model = temp.path().join("models/foo");
    fs::create_dir_all(model.join("yang")).unwrap();
    fs::write(model.join("yang/foo.yang"), "module foo {}").unwrap();
    let metadata = metadata_with_modules("../escaped", &["foo"]);
    fs::write(model.join("metadata.toml"), manifest_text(&metadata)).unwrap();
    let runner = RecordingRunner::new();

    let err = compiler(&runner).compile(&model).unwrap_err();

    assert_eq!(err.stage(), Stage::LoadMetadata);
    assert!(err.chain().contains("invalid model name '../escaped'"));
    assert!(runner.invocations().is_empty());
    assert!(!temp.path().join("models/escaped.tree").exists());
}

#[test]
fn test_prerelease_version_compiles() {
    let temp = TempDir::new().unwrap();
    let mut metadata = metadata_with_modules("foo", &["foo"]);
    metadata.version = "1.0.0-rc1".to_string();
    let model = write_model(temp.path(), &metadata).unwrap();
    let runner = RecordingRunner::new();

    let outcome = compiler(&runner).compile(&model).unwrap();

    assert_eq!(outcome.dictionary.version, "1.0.0-rc1");
    let dockerfile = fs::read_to_string(model.join("Dockerfile")).unwrap();
    assert!(dockerfile.contains("/build/_output/foo-1.0.0-rc1.so"));
}
