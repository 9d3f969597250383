//! Format Consistency Tests
//!
//! JSON and TOON carry the same `{ projectType, routes, sections }` data and
//! every format succeeds on the same project.

use crate::common::{assert_context_shape, assert_valid_json, section_names, TestRepo};

const ALL_FORMATS: [&str; 7] = ["ai", "human", "raw", "markdown", "tree", "json", "toon"];

#[test]
fn test_every_format_succeeds() {
    let repo = TestRepo::new();
    repo.with_nextjs_app();

    for format in ALL_FORMATS {
        let output = repo.run_cli_success(&["-f", format]);
        assert!(!output.trim().is_empty(), "{} output is empty", format);
    }
}

#[test]
fn test_json_structure() {
    let repo = TestRepo::new();
    repo.with_nextjs_app();

    let json = assert_valid_json(&repo.run_cli_success(&["-f", "json"]), "json structure");
    assert_context_shape(&json);
    assert_eq!(json["projectType"], "nextjs");

    let routes: Vec<&str> = json["routes"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r.as_str())
        .collect();
    assert!(routes.contains(&"(marketing)"));
    assert!(routes.contains(&"  about"));
    assert!(!routes.iter().any(|r| r.trim() == "api"));
}

#[test]
fn test_json_section_order_follows_files() {
    let repo = TestRepo::new();
    repo.with_nextjs_app();

    let json = assert_valid_json(&repo.run_cli_success(&["-f", "json"]), "section order");
    assert_eq!(
        section_names(&json),
        vec![
            "Other/app",
            "API/users",
            "Components/ui",
            "Features/billing",
            "Hooks",
            "Lib",
        ]
    );
}

#[test]
fn test_json_routes_empty_for_non_next() {
    let repo = TestRepo::new();
    repo.with_express_api();

    let json = assert_valid_json(&repo.run_cli_success(&["-f", "json"]), "express json");
    assert_context_shape(&json);
    assert!(json["routes"].as_array().unwrap().is_empty());
}

#[test]
fn test_toon_and_json_share_data() {
    let repo = TestRepo::new();
    repo.with_express_api();

    let toon = repo.run_cli_success(&["-f", "toon"]);
    let json = assert_valid_json(&repo.run_cli_success(&["-f", "json"]), "toon parity");

    assert!(toon.contains("projectType"));
    assert!(toon.contains("express"));
    for section in section_names(&json) {
        assert!(toon.contains(&section), "TOON missing section {}", section);
    }
}
