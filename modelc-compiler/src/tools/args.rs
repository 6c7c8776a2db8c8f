//! Command lines for the linter, tree and binding generator runs.

use std::{fs, io, path::Path};

use modelc_manifest::Metadata;

use super::Invocation;
use crate::paths;

/// Flags for a strict lint where warnings are errors.
const LINT_FLAGS: [&str; 4] = ["--lint", "--lint-ensure-hyphenated-names", "-W", "error"];

/// One `<model>/yang/<file>` argument per module, in manifest order.
fn module_sources(model_dir: &Path, metadata: &Metadata) -> Vec<String> {
    let yang_dir = paths::yang_dir(model_dir);
    metadata
        .modules
        .iter()
        .map(|module| yang_dir.join(&module.yang_file).display().to_string())
        .collect()
}

/// `pyang --lint --lint-ensure-hyphenated-names -W error <modules...>`
pub fn lint_invocation(program: &str, model_dir: &Path, metadata: &Metadata) -> Invocation {
    Invocation::new(program)
        .args(LINT_FLAGS)
        .args(module_sources(model_dir, metadata))
}

/// `pyang -f tree -p <yang> -o <model>/<name>.tree <modules...>`
pub fn tree_invocation(program: &str, model_dir: &Path, metadata: &Metadata) -> Invocation {
    let yang_dir = paths::yang_dir(model_dir);
    let tree_file = paths::tree_file(model_dir, &metadata.name);

    Invocation::new(program)
        .args(["-f", "tree", "-p"])
        .arg(yang_dir.display().to_string())
        .arg("-o")
        .arg(tree_file.display().to_string())
        .args(module_sources(model_dir, metadata))
}

/// Binding generator run over every file in the schema directory.
///
/// `schema_files` are bare file names relative to `<model>/yang`.
pub fn bindings_invocation(
    program: &str,
    model_dir: &Path,
    package_name: &str,
    schema_files: &[String],
) -> Invocation {
    let yang_dir = paths::yang_dir(model_dir);
    let output_file = paths::bindings_file(model_dir);

    Invocation::new(program)
        .arg(format!("-path={}", yang_dir.display()))
        .arg(format!("-output_file={}", output_file.display()))
        .arg(format!("-package_name={}", package_name))
        .arg("-generate_fakeroot")
        .arg("--include_descriptions")
        .args(schema_files.iter().cloned())
}

/// Names of the files in the schema directory, sorted by name.
///
/// Subdirectories are skipped. Sorting makes the generator command line
/// independent of the filesystem's enumeration order.
pub fn list_schema_files(yang_dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(yang_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().into_string().map_err(|name| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("non UTF-8 file name {:?}", name),
            )
        })?;
        names.push(name);
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::testing::metadata_with_modules;

    #[test]
    fn test_lint_arguments() {
        let metadata = metadata_with_modules("test", &["a", "b", "c"]);
        let invocation = lint_invocation("pyang", Path::new("/m"), &metadata);

        assert_eq!(invocation.program, "pyang");
        assert_eq!(
            invocation.args,
            [
                "--lint",
                "--lint-ensure-hyphenated-names",
                "-W",
                "error",
                "/m/yang/a.yang",
                "/m/yang/b.yang",
                "/m/yang/c.yang",
            ]
        );
    }

    #[test]
    fn test_lint_module_args_follow_manifest_order() {
        let metadata = metadata_with_modules("test", &["zeta", "alpha", "mid"]);
        let invocation = lint_invocation("pyang", Path::new("/m"), &metadata);

        let modules: Vec<&str> = invocation.args[LINT_FLAGS.len()..]
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(
            modules,
            ["/m/yang/zeta.yang", "/m/yang/alpha.yang", "/m/yang/mid.yang"]
        );
    }

    #[test]
    fn test_tree_arguments() {
        let metadata = metadata_with_modules("devicesim", &["devicesim", "openconfig-interfaces"]);
        let invocation = tree_invocation("pyang", Path::new("/m"), &metadata);

        assert_eq!(
            invocation.args,
            [
                "-f",
                "tree",
                "-p",
                "/m/yang",
                "-o",
                "/m/devicesim.tree",
                "/m/yang/devicesim.yang",
                "/m/yang/openconfig-interfaces.yang",
            ]
        );
    }

    #[test]
    fn test_bindings_arguments() {
        let files = vec!["a.yang".to_string(), "b.yang".to_string()];
        let invocation = bindings_invocation("generator", Path::new("/m"), "api", &files);

        assert_eq!(
            invocation.args,
            [
                "-path=/m/yang",
                "-output_file=/m/api/generated.go",
                "-package_name=api",
                "-generate_fakeroot",
                "--include_descriptions",
                "a.yang",
                "b.yang",
            ]
        );
    }

    #[test]
    fn test_module_count_matches_positional_args() {
        for count in 0..5 {
            let names: Vec<String> = (0..count).map(|i| format!("m{}", i)).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let metadata = metadata_with_modules("test", &refs);

            let lint = lint_invocation("pyang", Path::new("/m"), &metadata);
            let tree = tree_invocation("pyang", Path::new("/m"), &metadata);

            assert_eq!(lint.args.len(), LINT_FLAGS.len() + count);
            assert_eq!(tree.args.len(), 6 + count);
        }
    }

    #[test]
    fn test_list_schema_files_sorted_and_skips_dirs() {
        let temp = TempDir::new().unwrap();
        let yang = temp.path().join("yang");
        fs::create_dir_all(yang.join("submodules")).unwrap();
        for name in ["ietf-types.yang", "devicesim.yang", "b.yang"] {
            fs::write(yang.join(name), "module x {}").unwrap();
        }

        let files = list_schema_files(&yang).unwrap();

        assert_eq!(files, ["b.yang", "devicesim.yang", "ietf-types.yang"]);
    }

    #[test]
    fn test_list_schema_files_missing_dir() {
        let missing = PathBuf::from("/nonexistent/modelc/yang");
        assert!(list_schema_files(&missing).is_err());
    }
}
