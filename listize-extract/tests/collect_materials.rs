//! Integration tests for package discovery and material collection.

use std::{fs, path::Path};

use listize_extract::{
    BuildContext, CollectOptions, DiscoveryError, ExtractError, Node, RenderError,
    StructExtractor, TypeRenderer, collect_materials, collect_materials_with, discover_package,
    discover_package_for,
};
use listize_ir::{Field, Material, Struct};
use tempfile::TempDir;

const SOURCE_1: &str = r#"
  package source

  import (
    "another"
  )

  type Struct_1 struct {
    Field_1 string
    Field_2 int
  }

  type Struct_2 struct {
    Field_1 another.Field_1
    Field_2 *another.Field_2
  }
"#;

const SOURCE_2: &str = r#"
  package source

  type Struct_3 struct {
    Field_1 []byte
    Field_2 int64
  }
"#;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "source1.go", SOURCE_1);
    write(temp.path(), "source2.go", SOURCE_2);
    temp
}

fn expected(dir: &Path) -> Vec<Material> {
    vec![
        Material::new("source", dir.join("source1.go"))
            .with_struct(
                Struct::new("Struct_1")
                    .field(Field::new("Field_1", "string"))
                    .field(Field::new("Field_2", "int")),
            )
            .with_struct(
                Struct::new("Struct_2")
                    .field(Field::new("Field_1", "another.Field_1"))
                    .field(Field::new("Field_2", "*another.Field_2")),
            ),
        Material::new("source", dir.join("source2.go")).with_struct(
            Struct::new("Struct_3")
                .field(Field::new("Field_1", "[]byte"))
                .field(Field::new("Field_2", "int64")),
        ),
    ]
}

#[test]
fn test_collect_materials_in_file_order() {
    let temp = fixture();
    let got = collect_materials(temp.path(), &CollectOptions::default()).unwrap();
    assert_eq!(got, expected(temp.path()));
}

#[test]
fn test_collect_materials_parallel_matches_sequential() {
    let temp = fixture();
    for i in 0..8 {
        write(
            temp.path(),
            &format!("extra{i}.go"),
            &format!("package source\ntype Extra{i} struct {{ N int }}\n"),
        );
    }

    let sequential = collect_materials(temp.path(), &CollectOptions::default()).unwrap();
    let parallel =
        collect_materials(temp.path(), &CollectOptions::default().parallel(true)).unwrap();
    assert_eq!(sequential, parallel);
    assert_eq!(parallel.len(), 10);
}

#[test]
fn test_generated_files_excluded() {
    let temp = fixture();
    write(
        temp.path(),
        "source1_gen.go",
        "package source\ntype Struct_1s []*Struct_1\n",
    );

    let got = collect_materials(temp.path(), &CollectOptions::default()).unwrap();
    assert_eq!(got, expected(temp.path()));

    let all = collect_materials(temp.path(), &CollectOptions::default().exclude_suffix(""))
        .unwrap();
    assert_eq!(all.len(), 3);
    assert!(all[1].structs.is_empty());
}

#[test]
fn test_missing_directory() {
    let temp = TempDir::new().unwrap();
    let err = collect_materials(temp.path().join("testdata"), &CollectOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Discovery(DiscoveryError::NotFound { .. })
    ));
}

#[test]
fn test_empty_directory() {
    let temp = TempDir::new().unwrap();
    let err = collect_materials(temp.path(), &CollectOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Discovery(DiscoveryError::NoGoFiles { .. })
    ));
}

#[test]
fn test_parse_error_carries_path() {
    let temp = fixture();
    write(temp.path(), "broken.go", "package source\n\ntype Broken struct {\n");

    let err = collect_materials(temp.path(), &CollectOptions::default()).unwrap_err();
    match err {
        ExtractError::Parse { path, .. } => assert_eq!(path, temp.path().join("broken.go")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parallel_reports_first_failing_unit() {
    let temp = fixture();
    write(temp.path(), "a_broken.go", "package source\nfunc (\n");
    write(temp.path(), "z_broken.go", "package source\ntype Z struct {\n");

    let err = collect_materials(temp.path(), &CollectOptions::default().parallel(true))
        .unwrap_err();
    match err {
        ExtractError::Parse { path, .. } => assert_eq!(path, temp.path().join("a_broken.go")),
        other => panic!("unexpected error: {other:?}"),
    }
}

struct RejectPointers;

impl TypeRenderer for RejectPointers {
    fn render(&self, node: Node<'_>, source: &[u8]) -> Result<String, RenderError> {
        if node.kind() == "pointer_type" {
            return Err(RenderError::Unsupported {
                kind: node.kind().to_string(),
                line: node.start_position().row + 1,
            });
        }
        Ok(node.utf8_text(source).unwrap_or_default().to_string())
    }
}

#[test]
fn test_render_error_wrapped_with_path() {
    let temp = fixture();
    let extractor = StructExtractor::with_renderer(RejectPointers);

    let err = collect_materials_with(temp.path(), &CollectOptions::default(), &extractor)
        .unwrap_err();
    match err {
        ExtractError::Render { path, source } => {
            assert_eq!(path, temp.path().join("source1.go"));
            assert!(matches!(source, RenderError::Unsupported { ref kind, .. } if kind == "pointer_type"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_discover_package_files() {
    let temp = TempDir::new().unwrap();
    let names = ["eee.go", "aaa.go", "ccc.go", "bbb.go", "ddd.go"];
    for name in names {
        write(temp.path(), name, "package testdata\n");
    }
    write(temp.path(), "aaa_test.go", "package testdata_test\n");
    write(temp.path(), "tool.go", "//go:build ignore\n\npackage main\n");
    write(temp.path(), "notes.txt", "not go");
    fs::create_dir(temp.path().join("sub.go")).unwrap();

    let package = discover_package(temp.path()).unwrap();
    assert_eq!(package.name, "testdata");
    let got: Vec<_> = package
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(got, vec!["aaa.go", "bbb.go", "ccc.go", "ddd.go", "eee.go"]);
}

#[test]
fn test_discover_multiple_packages() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.go", "package one\n");
    write(temp.path(), "b.go", "package two\n");

    let err = discover_package(temp.path()).unwrap_err();
    match err {
        DiscoveryError::MultiplePackages { first, second, .. } => {
            assert_eq!(first, "one");
            assert_eq!(second, "two");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_discover_not_a_directory() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.go", "package one\n");

    let err = discover_package(temp.path().join("a.go")).unwrap_err();
    assert!(matches!(err, DiscoveryError::NotADirectory { .. }));
}

#[test]
fn test_discover_missing_package_clause() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.go", "type T struct{}\n");

    let err = discover_package(temp.path()).unwrap_err();
    assert!(matches!(err, DiscoveryError::MissingPackageClause { .. }));
}

fn file_names(package: &listize_extract::Package) -> Vec<String> {
    package
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

fn platform_fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a_linux.go", "package plat\n\ntype A struct{ X int }\n");
    write(temp.path(), "a_windows.go", "package plat\n\ntype A struct{ X int }\n");
    write(temp.path(), "a_windows_amd64.go", "package plat\n\ntype W struct{ X int }\n");
    write(
        temp.path(),
        "b.go",
        "//go:build never_set_tag\n\npackage plat\n\ntype B struct{ X int }\n",
    );
    write(temp.path(), "c.go", "//go:build !windows\n\npackage plat\n");
    write(temp.path(), "d.go", "package plat\n");
    temp
}

#[test]
fn test_discover_applies_file_name_constraints() {
    let temp = platform_fixture();

    let linux = discover_package_for(temp.path(), &BuildContext::new("linux", "amd64")).unwrap();
    assert_eq!(file_names(&linux), vec!["a_linux.go", "c.go", "d.go"]);

    let windows =
        discover_package_for(temp.path(), &BuildContext::new("windows", "amd64")).unwrap();
    assert_eq!(
        file_names(&windows),
        vec!["a_windows.go", "a_windows_amd64.go", "d.go"]
    );

    let windows_arm =
        discover_package_for(temp.path(), &BuildContext::new("windows", "arm64")).unwrap();
    assert_eq!(file_names(&windows_arm), vec!["a_windows.go", "d.go"]);
}

#[test]
fn test_discover_for_host_keeps_one_goos_variant() {
    let temp = platform_fixture();

    let names = file_names(&discover_package(temp.path()).unwrap());
    let variants = names.iter().filter(|n| n.starts_with("a_")).count();
    assert!(variants <= 1, "{names:?}");
    assert!(!names.contains(&"b.go".to_string()), "{names:?}");
    assert!(names.contains(&"d.go".to_string()), "{names:?}");
}

#[test]
fn test_collect_skips_unsatisfied_build_tags() {
    let temp = fixture();
    write(
        temp.path(),
        "tagged.go",
        "//go:build never_set_tag\n\npackage source\n\ntype Tagged struct{ X int }\n",
    );

    let got = collect_materials(temp.path(), &CollectOptions::default()).unwrap();
    assert_eq!(got, expected(temp.path()));
}

#[test]
fn test_discover_malformed_build_constraint() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.go", "//go:build linux &&\n\npackage one\n");

    let err = discover_package(temp.path()).unwrap_err();
    match err {
        DiscoveryError::Constraint { path, source } => {
            assert_eq!(path, temp.path().join("a.go"));
            assert_eq!(source.expr, "linux &&");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
