//! Scan command tests
//!
//! Default invocation, path argument, output file and extraction results as
//! seen through the JSON export.

use crate::common::{assert_bucket, assert_contains_all, assert_valid_json, find_file, TestRepo};

// ============================================================================
// DEFAULT INVOCATION
// ============================================================================

#[test]
fn test_default_format_is_ai() {
    let repo = TestRepo::new();
    repo.with_nextjs_app();

    let output = repo.run_cli_success(&[]);
    assert!(output.starts_with("# Project Context (Next.js)"), "{}", output);
}

#[test]
fn test_path_argument() {
    let repo = TestRepo::new();
    repo.add_ts_function("web/src/main.ts", "main", "");

    let output = repo.run_cli_success(&["web", "-f", "raw"]);
    assert_contains_all(&output, &["main.ts", "function: main"]);
}

#[test]
fn test_output_file() {
    let repo = TestRepo::new();
    repo.with_express_api();

    let stdout = repo.run_cli_success(&["-f", "json", "-o", "report.json"]);
    assert!(stdout.is_empty(), "report should not go to stdout: {}", stdout);

    let written = std::fs::read_to_string(repo.path().join("report.json")).unwrap();
    let json = assert_valid_json(&written, "output file");
    assert_eq!(json["projectType"], "express");
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let repo = TestRepo::new();
    repo.add_ts_function("src/a.ts", "a", "");

    let output = repo.run_cli(&["-v", "-f", "json"]).unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_valid_json(&stdout, "verbose json");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Extracting exports"), "stderr: {}", stderr);
}

// ============================================================================
// EXTRACTION THROUGH THE CLI
// ============================================================================

#[test]
fn test_esm_extraction() {
    let repo = TestRepo::new();
    repo.with_nextjs_app();

    let output = repo.run_cli_success(&["-f", "json"]);
    let json = assert_valid_json(&output, "esm json");

    assert_bucket(&json, "actions.ts", "functions", &["createInvoice", "updateInvoice"]);
    assert_bucket(&json, "types.ts", "types", &["InvoiceId"]);
    assert_bucket(&json, "types.ts", "interfaces", &["Invoice"]);
    assert_bucket(&json, "useCart.ts", "functions", &["useCart"]);
    assert_bucket(&json, "useCart.ts", "constants", &["CART_KEY"]);
    assert_bucket(&json, "format.ts", "functions", &["formatPrice"]);
    assert_bucket(&json, "format.ts", "constants", &["CURRENCY"]);

    let button = find_file(&json, "button.tsx").unwrap();
    assert_eq!(button["defaultExport"], "Button");
    let about = find_file(&json, "page.tsx").unwrap();
    assert!(about["defaultExport"].is_string());
}

#[test]
fn test_commonjs_extraction() {
    let repo = TestRepo::new();
    repo.with_express_api();

    let output = repo.run_cli_success(&["-f", "json"]);
    let json = assert_valid_json(&output, "commonjs json");

    assert_bucket(&json, "userController.js", "functions", &["getUser", "listUsers"]);
    assert_bucket(&json, "db.js", "constants", &["DB_URL", "settings"]);
    assert_bucket(&json, "db.js", "functions", &[]);
    assert_bucket(&json, "server.js", "functions", &["start", "stop"]);
    assert_bucket(&json, "User.js", "classes", &["User"]);

    let routes = find_file(&json, "users.js").unwrap();
    assert_eq!(routes["defaultExport"], "router");
}

#[test]
fn test_test_files_are_not_scanned() {
    let repo = TestRepo::new();
    repo.add_ts_function("src/util.ts", "util", "");
    repo.add_ts_function("src/util.test.ts", "testUtil", "");
    repo.add_ts_function("src/__tests__/helpers.ts", "helper", "");
    repo.add_file("src/global.d.ts", "export interface Window {}");

    let output = repo.run_cli_success(&["-f", "json"]);
    let json = assert_valid_json(&output, "test files");
    assert!(find_file(&json, "util.ts").is_some());
    assert!(find_file(&json, "util.test.ts").is_none());
    assert!(find_file(&json, "helpers.ts").is_none());
    assert!(find_file(&json, "global.d.ts").is_none());
}
