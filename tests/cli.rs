use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

const PATTERNS: &str = "
*.jpg
# comment

syntax: regexp
.*foo\\d+
";

fn file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn pathmatcher() -> Command {
    Command::cargo_bin("pathmatcher").unwrap()
}

#[test]
fn help() {
    let output = pathmatcher().arg("--help").output().unwrap();

    assert!(output.status.success(), "--help returns 0");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--pattern-file"));
    assert!(stdout.contains("--black-list"));
    assert!(stdout.contains("--inverse"));
}

#[test]
fn whitelist_by_default() {
    let patterns = file(PATTERNS);
    pathmatcher()
        .arg("--pattern-file")
        .arg(patterns.path())
        .args(&["foofoo1", "head.jpg", "foo", "bar"])
        .assert()
        .success()
        .stdout("foofoo1\nhead.jpg\n");
}

#[test]
fn blacklist() {
    let patterns = file(PATTERNS);
    pathmatcher()
        .arg("--pattern-file")
        .arg(patterns.path())
        .arg("--black-list")
        .args(&["foofoo1", "head.jpg", "foo", "bar"])
        .assert()
        .success()
        .stdout("foo\nbar\n");
}

#[test]
fn reads_stdin_without_paths() {
    let patterns = file(PATTERNS);
    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .write_stdin("boobs.jpg\nfoo 123\r\nbarfoo2\nsmiley.gif\n")
        .assert()
        .success()
        .stdout("boobs.jpg\nbarfoo2\n");
}

#[test]
fn custom_separator() {
    let patterns = file(PATTERNS);
    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .args(&["--separator", ","])
        .args(&["a.jpg", "b.jpg", "c.png"])
        .assert()
        .success()
        .stdout("a.jpg,b.jpg\n");
}

#[test]
fn empty_result_prints_nothing() {
    let patterns = file(PATTERNS);
    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .args(&["nothing", "matches"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn unknown_syntax_fails() {
    let patterns = file("*.jpg\nsyntax: none\n");
    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .arg("a.jpg")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn invalid_regexp_fails() {
    let patterns = file("syntax: regexp\nfoo(\n");
    let output = pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .arg("foo")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"), "{}", stderr);
}

#[test]
fn missing_pattern_file_fails() {
    pathmatcher()
        .args(&["-p", "/nonexistent/pathmatcher/patterns", "a"])
        .assert()
        .failure();
}

#[test]
fn pattern_file_is_required() {
    pathmatcher().arg("a.jpg").assert().failure();
}

#[test]
fn inverse() {
    let patterns = file("*.jpg jabba dabba\n^.*foo\\d+ foobar\n");
    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .arg("--inverse")
        .args(&["photo.jpg", "barfoo2", "nomatch", "other.jpg"])
        .assert()
        .success()
        .stdout("jabba dabba\njabba dabba\nfoobar\n");
}

#[test]
fn inverse_missing_payload_fails() {
    let patterns = file("*.jpg\n");
    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .arg("--inverse")
        .arg("photo.jpg")
        .assert()
        .failure();
}

#[test]
fn shebang_whitelist() {
    let patterns = file("*.jpg\n");
    let script = file("#!/usr/bin/env python\nprint('hi')\n");
    let text = file("just text\n");

    let script_path = script.path().to_str().unwrap().to_string();
    let text_path = text.path().to_str().unwrap().to_string();

    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .args(&["--shebang", "python"])
        .args(&[&script_path, &text_path])
        .assert()
        .success()
        .stdout(format!("{}\n", script_path));
}

#[test]
fn shebang_blacklist() {
    let patterns = file("*.jpg\n");
    let script = file("#!/bin/sh\n");
    let text = file("#!/usr/bin/python\n");

    let script_path = script.path().to_str().unwrap().to_string();
    let text_path = text.path().to_str().unwrap().to_string();

    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .arg("--black-list")
        .args(&["--shebang", "python"])
        .args(&[&script_path, &text_path])
        .assert()
        .success()
        .stdout(format!("{}\n", script_path));
}

#[test]
fn shebang_unreadable_candidate_fails() {
    let patterns = file("*.jpg\n");
    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .args(&["--shebang", "python", "/nonexistent/pathmatcher/script"])
        .assert()
        .failure();
}

#[cfg(unix)]
#[test]
fn path_argument_not_utf8() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let patterns = file("*.jpg\n");
    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .arg(OsString::from_vec(b"bad\xff.jpg".to_vec()))
        .arg("ok.jpg")
        .assert()
        .success()
        .stdout("bad\u{fffd}.jpg\nok.jpg\n");
}

#[test]
fn stdin_line_not_utf8() {
    let patterns = file("*.jpg\n*.txt\n");
    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .write_stdin(&b"ok.jpg\nbad\xff.txt\n"[..])
        .assert()
        .success()
        .stdout("ok.jpg\nbad\u{fffd}.txt\n");
}

#[test]
fn glob_braces_and_backslashes_are_literal() {
    let patterns = file("file{1,2}.txt\nC:\\temp\\*.log\n?.md\n");
    pathmatcher()
        .arg("-p")
        .arg(patterns.path())
        .args(&["file1.txt", "file{1,2}.txt", "C:\\temp\\x.log", "é.md"])
        .assert()
        .success()
        .stdout("file{1,2}.txt\nC:\\temp\\x.log\né.md\n");
}
