use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

const DECLARATIONS: &str = r#"{
    "packages": [
        { "name": "lodash", "version": "^4.17.0", "alias": "_", "force": true },
        { "name": "types-node", "scope": "types", "pkg": "node" },
        { "name": "eslint", "from": "https://registry.example.com" }
    ]
}"#;

fn npm_global(cwd: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("npm-global"));
    cmd.current_dir(cwd)
        .env_remove("NPM_GLOBAL_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_check_local_file() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("npm-global.json"), DECLARATIONS).unwrap();

    npm_global(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout("ok: 3 package(s)\n");
}

#[test]
fn test_check_reports_rejected_entries() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("npm-global.json"),
        r#"{"packages": [{"name": "zx"}, {"name": "zx"}, {"name": ""}]}"#,
    )
    .unwrap();

    npm_global(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "entry #1: package 'zx' is already declared",
        ))
        .stdout(predicate::str::contains(
            "entry #2: package name must not be empty",
        ))
        .stderr(predicate::str::contains("2 declaration(s) rejected"));
}

#[test]
fn test_list_with_explicit_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("custom.json");
    std::fs::write(&file, DECLARATIONS).unwrap();

    npm_global(dir.path())
        .args(["list", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout("eslint (any)\nlodash ^4.17.0\ntypes-node (any)\n");
}

#[test]
fn test_file_from_environment() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("env.json");
    std::fs::write(&file, r#"{"packages": [{"name": "pnpm", "version": "9"}]}"#).unwrap();

    npm_global(dir.path())
        .env("NPM_GLOBAL_FILE", &file)
        .arg("list")
        .assert()
        .success()
        .stdout("pnpm 9\n");
}

#[test]
fn test_show_package() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("npm-global.json"), DECLARATIONS).unwrap();

    npm_global(dir.path())
        .args(["show", "lodash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package: lodash"))
        .stdout(predicate::str::contains("version: ^4.17.0"))
        .stdout(predicate::str::contains("alias:   _"))
        .stdout(predicate::str::contains("force:   true"))
        .stdout(predicate::str::contains("from:    (unset)"));
}

#[test]
fn test_show_unknown_package() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("npm-global.json"), DECLARATIONS).unwrap();

    npm_global(dir.path())
        .args(["show", "prettier"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Package prettier is not declared"));
}

#[test]
fn test_export_json() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("npm-global.json"), DECLARATIONS).unwrap();

    let output = npm_global(dir.path())
        .arg("export")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "name": "eslint", "from": "https://registry.example.com" },
            { "name": "lodash", "version": "^4.17.0", "alias": "_", "force": true },
            { "name": "types-node", "scope": "types", "pkg": "node" }
        ])
    );
}

#[test]
fn test_unknown_field_is_an_error() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("npm-global.json"),
        r#"{"packages": [{"name": "zx", "forse": true}]}"#,
    )
    .unwrap();

    npm_global(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid declaration file"));
}

#[test]
fn test_missing_explicit_file() {
    let dir = tempdir().unwrap();

    npm_global(dir.path())
        .args(["check", "--file", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
