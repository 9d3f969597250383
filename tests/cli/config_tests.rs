//! Configuration tests: config files and flag overrides

use crate::common::{assert_valid_json, find_file, section_names, TestRepo};

#[test]
fn test_project_config_file() {
    let repo = TestRepo::new();
    repo.add_ts_function("src/a.ts", "a", "");
    repo.add_ts_function("generated/b.ts", "b", "");
    repo.add_file(".exportmap.toml", "ignore = [\"generated\"]\n");

    let json = assert_valid_json(&repo.run_cli_success(&["-f", "json"]), "project config");
    assert!(find_file(&json, "a.ts").is_some());
    assert!(find_file(&json, "b.ts").is_none());
}

#[test]
fn test_ignore_flag_appends() {
    let repo = TestRepo::new();
    repo.add_ts_function("src/a.ts", "a", "");
    repo.add_ts_function("src/a.gen.ts", "gen", "");
    repo.add_ts_function("node_modules/pkg/index.ts", "dep", "");

    let output = repo.run_cli_success(&["-f", "json", "--ignore", "*.gen.ts"]);
    let json = assert_valid_json(&output, "ignore flag");
    assert!(find_file(&json, "a.ts").is_some());
    assert!(find_file(&json, "a.gen.ts").is_none());
    assert!(find_file(&json, "index.ts").is_none());
}

#[test]
fn test_ext_flag_replaces_extensions() {
    let repo = TestRepo::new();
    repo.add_ts_function("src/a.ts", "a", "");
    repo.add_file("src/b.mjs", "export function b() {}");

    let output = repo.run_cli_success(&["-f", "json", "--ext", "mjs"]);
    let json = assert_valid_json(&output, "ext flag");
    assert!(find_file(&json, "b.mjs").is_some());
    assert!(find_file(&json, "a.ts").is_none());
}

#[test]
fn test_max_depth_flag() {
    let repo = TestRepo::new();
    repo.add_ts_function("top.ts", "top", "");
    repo.add_ts_function("a/b/c/deep.ts", "deep", "");

    let output = repo.run_cli_success(&["-f", "json", "--max-depth", "1"]);
    let json = assert_valid_json(&output, "max depth");
    assert!(find_file(&json, "top.ts").is_some());
    assert!(find_file(&json, "deep.ts").is_none());
    assert_eq!(section_names(&json), vec!["_root"]);
}

#[test]
fn test_gitignore_and_no_gitignore() {
    let repo = TestRepo::new();
    repo.add_ts_function("src/a.ts", "a", "");
    repo.add_ts_function("out/b.ts", "b", "");
    repo.add_file(".gitignore", "out/\n");

    let json = assert_valid_json(&repo.run_cli_success(&["-f", "json"]), "gitignore");
    assert!(find_file(&json, "b.ts").is_none());

    let json = assert_valid_json(
        &repo.run_cli_success(&["-f", "json", "--no-gitignore"]),
        "no gitignore",
    );
    assert!(find_file(&json, "b.ts").is_some());
}

#[test]
fn test_explicit_config_missing_fails() {
    let repo = TestRepo::new();
    repo.add_ts_function("src/a.ts", "a", "");

    let output = repo.run_cli(&["--config", "missing.toml"]).unwrap();
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"), "{}", stderr);
}

#[test]
fn test_explicit_config_malformed_fails() {
    let repo = TestRepo::new();
    repo.add_ts_function("src/a.ts", "a", "");
    repo.add_file("custom.toml", "max_depth = \"deep\"\n");

    let (_, stderr) = repo.run_cli_failure(&["--config", "custom.toml"]);
    assert!(stderr.contains("Configuration error"), "{}", stderr);
}

#[test]
fn test_broken_project_config_warns_and_continues() {
    let repo = TestRepo::new();
    repo.add_ts_function("src/a.ts", "a", "");
    repo.add_file(".exportmap.toml", "ignore = [");

    let output = repo.run_cli(&["-f", "json"]).unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ignoring"), "{}", stderr);
}
