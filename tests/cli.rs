use std::path::PathBuf;
use std::process::{Command, Output};

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clang-index"))
        .args(args)
        .env_remove("CLANG_INDEX_ARGS")
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn clang-index")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn version_prints_clang_version() {
    let output = run(&["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("clang version"));
}

#[test]
fn dump_single_file_prints_report() {
    let path = testdata("struct.c");
    let output = run(&["dump", path.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], format!("tu: {}", path.display()));
    assert_eq!(lines[1], "cursor-isnull: false");
    assert_eq!(lines[3], "cursor-kind: TranslationUnit");
    assert!(lines[4].starts_with("tu-fname: ") && lines[4].ends_with("struct.c"));
    assert_eq!(
        &lines[5..],
        [
            "StructDecl: list (c:@S@list)",
            "FieldDecl: next (c:@S@list@FI@next)",
            "FieldDecl: value (c:@S@list@FI@value)",
            "EnumDecl: state (c:@E@state)",
            "EnumConstantDecl: IDLE (c:@E@state@IDLE)",
            "EnumConstantDecl: BUSY (c:@E@state@BUSY)",
        ]
    );
}

#[test]
fn dump_honors_clang_args_and_env() {
    let path = testdata("struct.c");
    let output = run(&["dump", path.to_str().unwrap(), "--", "-DWITH_COUNT"]);
    assert!(stdout(&output).contains("FunctionDecl: count (c:@F@count)"));

    let output = Command::new(env!("CARGO_BIN_EXE_clang-index"))
        .args(["dump", path.to_str().unwrap()])
        .env("CLANG_INDEX_ARGS", "-DWITH_COUNT -Wall")
        .output()
        .unwrap();
    assert!(stdout(&output).contains("FunctionDecl: count (c:@F@count)"));
}

#[test]
fn dump_json_reports() {
    let path = testdata("struct.c");
    let output = run(&["dump", "--json", "--all", path.to_str().unwrap(), "--", "-DWITH_COUNT"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let report: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(report["root"]["kind"], "TranslationUnit");
    let children = report["root"]["children"].as_array().unwrap();
    assert_eq!(children.len(), 3);
    assert_eq!(children[2]["spelling"], "count");
    assert!(!children[2]["children"].as_array().unwrap().is_empty());
    assert_eq!(report["diagnostics"].as_array().unwrap().len(), 0);
}

#[test]
fn dump_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.c");
    let output = run(&["dump", "--json", path.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn compdb_lists_commands() {
    let output = run(&["compdb", testdata("").to_str().unwrap()]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains(":: got 2 compile commands"), "{text}");
    assert!(text.contains("::  dir= \"/home/user/llvm/build\""));
    assert!(text.contains("\"-DSOMEDEF=With spaces, quotes and -es.\""));
    assert!(text.contains("... [done]"));
}

#[test]
fn compdb_without_database_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["compdb", dir.path().to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn diagnostics_exit_status_follows_severity() {
    let output = run(&["diagnostics", testdata("broken.c").to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("undefined_value"));

    let output = run(&["diagnostics", testdata("struct.c").to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn dump_directory_prints_every_source() {
    let output = run(&["dump", testdata("").to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let text = stdout(&output);
    let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("== ")).collect();
    assert_eq!(headers.len(), 3, "{headers:?}");
    assert!(headers[0].ends_with("broken.c =="));
    assert!(headers[1].ends_with("hello.c =="));
    assert!(headers[2].ends_with("struct.c =="));
    assert!(text.contains("FunctionDecl: main (c:@F@main)"));
    assert!(text.contains("FunctionDecl: answer (c:@F@answer)"));
}
