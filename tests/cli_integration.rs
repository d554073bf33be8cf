//! CLI integration tests for nuspec-deps.
//!
//! These tests lay out a packages folder in a temporary directory and run
//! the binary against it.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const SERILOG_SINKS_FILE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd">
  <metadata>
    <id>Serilog.Sinks.File</id>
    <version>4.1.0</version>
    <dependencies>
      <group targetFramework=".NETFramework4.5">
        <dependency id="Serilog" version="2.5.0" />
      </group>
      <group targetFramework=".NETStandard2.0">
        <dependency id="Serilog" version="2.5.0" />
        <dependency id="System.IO.FileSystem" version="4.0.1" />
      </group>
    </dependencies>
  </metadata>
</package>
"#;

/// Get the nuspec-deps binary command, isolated from user config.
fn nuspec_deps(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nuspec-deps").unwrap();
    cmd.env("HOME", home).env_remove("NUSPEC_DEPS_FRAMEWORK");
    cmd
}

fn write_nupkg(path: &Path, entries: &[(&str, &str)]) {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    let bytes = writer.finish().unwrap().into_inner();

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

fn packages_with_serilog(tmp: &TempDir) -> std::path::PathBuf {
    let packages = tmp.path().join("packages");
    write_nupkg(
        &packages.join("Serilog.Sinks.File.4.1.0.nupkg"),
        &[
            ("[Content_Types].xml", "<Types />"),
            ("Serilog.Sinks.File.nuspec", SERILOG_SINKS_FILE),
        ],
    );
    packages
}

// ============================================================================
// nuspec-deps inspect
// ============================================================================

#[test]
fn test_inspect_prints_tree() {
    let tmp = TempDir::new().unwrap();
    let packages = packages_with_serilog(&tmp);

    nuspec_deps(tmp.path())
        .args(["inspect", "Serilog.Sinks.File", "4.1.0", "--framework", ".NETStandard2.1"])
        .arg("--packages-dir")
        .arg(&packages)
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Serilog.Sinks.File (.NETStandard2.1)"))
        .stdout(predicate::str::contains("├── Serilog 2.5.0"))
        .stdout(predicate::str::contains("└── System.IO.FileSystem 4.0.1"));
}

#[test]
fn test_inspect_json_output() {
    let tmp = TempDir::new().unwrap();
    let packages = packages_with_serilog(&tmp);

    let output = nuspec_deps(tmp.path())
        .args(["inspect", "Serilog.Sinks.File", "4.1.0", "--format", "json"])
        .arg("--packages-dir")
        .arg(&packages)
        .env("NUSPEC_DEPS_FRAMEWORK", ".NETFramework4.7.2")
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Serilog.Sinks.File");
    assert_eq!(json["children"].as_array().unwrap().len(), 1);
    assert_eq!(json["children"][0]["id"], "Serilog");
}

#[test]
fn test_inspect_nested_package_folder() {
    let tmp = TempDir::new().unwrap();
    let packages = tmp.path().join("packages");
    write_nupkg(
        &packages.join("Foo.1.0.0").join("Foo.1.0.0.nupkg"),
        &[(
            "Foo.nuspec",
            r#"<package><metadata><dependencies>
                <dependency id="Newtonsoft.Json" version="12.0.1" />
            </dependencies></metadata></package>"#,
        )],
    );

    nuspec_deps(tmp.path())
        .args(["inspect", "Foo", "1.0.0", "-f", "net472"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("└── Newtonsoft.Json 12.0.1"));
}

#[test]
fn test_inspect_missing_archive_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("packages")).unwrap();

    nuspec_deps(tmp.path())
        .args(["inspect", "Nowhere", "1.0.0", "-f", "net472", "--format", "json"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"))
        .stderr(predicate::str::contains("No archive found"));
}

#[test]
fn test_inspect_corrupt_archive_fails() {
    let tmp = TempDir::new().unwrap();
    let packages = tmp.path().join("packages");
    fs::create_dir(&packages).unwrap();
    fs::write(packages.join("Broken.1.0.0.nupkg"), b"not a zip").unwrap();

    nuspec_deps(tmp.path())
        .args(["inspect", "Broken", "1.0.0", "-f", "net472"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("package archive could not be opened"));
}

#[test]
fn test_inspect_archive_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();
    let packages = tmp.path().join("packages");
    write_nupkg(&packages.join("Bare.1.0.0.nupkg"), &[("lib/net45/Bare.dll", "MZ")]);

    nuspec_deps(tmp.path())
        .args(["inspect", "Bare", "1.0.0", "-f", "net472"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no .nuspec entry"));
}

#[test]
fn test_inspect_requires_framework() {
    let tmp = TempDir::new().unwrap();
    let packages = packages_with_serilog(&tmp);

    nuspec_deps(tmp.path())
        .args(["inspect", "Serilog.Sinks.File", "4.1.0"])
        .arg("--packages-dir")
        .arg(&packages)
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no target framework given"));
}

#[test]
fn test_inspect_rejects_bad_framework() {
    let tmp = TempDir::new().unwrap();
    let packages = packages_with_serilog(&tmp);

    nuspec_deps(tmp.path())
        .args(["inspect", "Serilog.Sinks.File", "4.1.0", "-f", "latest"])
        .arg("--packages-dir")
        .arg(&packages)
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a target framework moniker"));
}

#[test]
fn test_inspect_missing_packages_dir() {
    let tmp = TempDir::new().unwrap();

    nuspec_deps(tmp.path())
        .args(["inspect", "Foo", "1.0.0", "-f", "net472"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

// ============================================================================
// nuspec-deps parse
// ============================================================================

#[test]
fn test_parse_uses_project_config() {
    let tmp = TempDir::new().unwrap();
    let nuspec = tmp.path().join("Serilog.Sinks.File.nuspec");
    fs::write(&nuspec, SERILOG_SINKS_FILE).unwrap();

    let config_dir = tmp.path().join(".nuspec-deps");
    fs::create_dir(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[resolve]\ntarget-framework = \".NETFramework4.6\"\n",
    )
    .unwrap();

    nuspec_deps(tmp.path())
        .args(["parse", "Serilog.Sinks.File.nuspec"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Serilog.Sinks.File (.NETFramework4.6)"))
        .stdout(predicate::str::contains("└── Serilog 2.5.0"))
        .stdout(predicate::str::contains("System.IO.FileSystem").not());
}

#[test]
fn test_parse_invalid_manifest_fails() {
    let tmp = TempDir::new().unwrap();
    let nuspec = tmp.path().join("Empty.nuspec");
    fs::write(&nuspec, "<package></package>").unwrap();

    nuspec_deps(tmp.path())
        .args(["parse", "Empty.nuspec", "-f", "net472"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid nuspec manifest"))
        .stderr(predicate::str::contains("metadata"));
}

#[test]
fn test_parse_unparseable_manifest_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Bad.nuspec"), "<package><metadata>").unwrap();

    nuspec_deps(tmp.path())
        .args(["parse", "Bad.nuspec", "-f", "net472"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not well-formed XML"));
}

#[test]
fn test_parse_with_explicit_name() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("x.nuspec"), SERILOG_SINKS_FILE).unwrap();

    nuspec_deps(tmp.path())
        .args(["parse", "x.nuspec", "--name", "Custom", "-f", "net472", "--format", "json"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Custom\""))
        .stdout(predicate::str::contains("\"children\": []"));
}

// ============================================================================
// nuspec-deps completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();

    nuspec_deps(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nuspec-deps"));
}
