// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Licenser Contributors

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("licenser").unwrap()
}

fn output_text(output: &std::process::Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            let name = entry.path().display().to_string();
            files.push((name, fs::read(entry.path()).unwrap()));
        }
    }
    files
}

#[test]
fn apply_mit_to_go_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("main.go");
    let original = "package main\n\nfunc main() {}\n";
    fs::write(&path, original).unwrap();

    cmd()
        .args(["apply", "--license", "MIT", "--year", "2019", "--owner", "Jane Doe"])
        .arg(&path)
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(
        "// Copyright (c) 2019 Jane Doe\n//\n// Permission is hereby granted, free of charge,"
    ));
    assert!(content.ends_with("// SOFTWARE.\n\npackage main\n\nfunc main() {}\n"));
    for line in content.lines().take_while(|x| !x.is_empty()) {
        assert!(line.starts_with("//"), "line not commented: {line}");
    }

    // second run is a no-op
    cmd()
        .args(["apply", "-l", "MIT"])
        .arg(&path)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn check_recurse_lists_unlicensed() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(
        root.join("a.go"),
        "// Licensed under the Apache License, Version 2.0 (the \"License\");\npackage a\n",
    )
    .unwrap();
    fs::write(root.join("b.go"), "package b\n").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("c.py"), "print(1)\n").unwrap();

    let output = cmd()
        .args(["check", "--recurse"])
        .arg(root)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = output_text(&output);
    assert!(text.contains("b.go"), "output: {text}");
    assert!(text.contains("c.py"), "output: {text}");
    assert!(!text.contains("a.go"), "output: {text}");
}

#[test]
fn check_unknown_extension_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("notes.txt");
    fs::write(&path, "just some notes\n").unwrap();

    let output = cmd().arg("check").arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output_text(&output).contains("notes.txt"));

    let output = cmd().arg("apply").arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&path).unwrap(), "just some notes\n");
}

#[test]
fn check_succeeds_after_apply() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("x.rs"), "fn x() {}\n").unwrap();
    fs::write(root.join("y.sh"), "echo y\n").unwrap();

    cmd().args(["apply", "-r"]).arg(root).assert().success();
    cmd().args(["check", "-r"]).arg(root).assert().success();
    let content = fs::read_to_string(root.join("y.sh")).unwrap();
    assert!(content.contains("# Licensed under the Apache License, Version 2.0"));
}

#[test]
fn invalid_license_touches_nothing() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("a.go"), "package a\n").unwrap();
    fs::write(root.join("b.py"), "b = 1\n").unwrap();
    let before = snapshot(root);

    let output = cmd()
        .args(["apply", "--recurse", "--license", "Foo"])
        .arg(root)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output_text(&output).contains("Foo"));
    assert_eq!(snapshot(root), before);
}

#[test]
fn invalid_style_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("a.go");
    fs::write(&path, "package a\n").unwrap();

    let output = cmd()
        .args(["apply", "--style", "go"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&path).unwrap(), "package a\n");

    let output = cmd()
        .args(["apply", "--style", "go:wavy"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&path).unwrap(), "package a\n");
}

#[test]
fn directory_without_recurse_fails() {
    let tmp = TempDir::new().unwrap();
    let output = cmd().arg("check").arg(tmp.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn styles_lists_overrides() {
    cmd()
        .args(["styles", "-s", "foo:dash,go:hash"])
        .assert()
        .success()
        .stdout(contains("foo:dash"))
        .stdout(contains("go:hash"))
        .stdout(contains("rs:slash"));
}
