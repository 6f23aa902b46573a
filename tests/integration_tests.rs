//! Integration tests: CLI smoke tests plus full-pipeline library scenarios.

mod common;

use std::fs;

use serde_json::Value;

use gov_directory::directory::fixture::Directory;
use gov_directory::directory::model::HEADER_KEYS;
use gov_directory::render::node::RenderNode;
use gov_directory::render::renderer::{DirectoryRenderer, PageView};

// ──────────────────── CLI smoke ────────────────────

#[test]
fn help_command_prints_usage() {
    let result = common::run_cli_case("help_command_prints_usage", &["--help"]);
    assert!(
        result.status.success(),
        "expected success; log: {}",
        result.log_path.display()
    );
    assert!(
        result.stdout.contains("Usage: govdir [OPTIONS] <COMMAND>"),
        "missing help banner; log: {}",
        result.log_path.display()
    );
}

#[test]
fn version_command_prints_version() {
    let result = common::run_cli_case("version_command_prints_version", &["--version"]);
    assert!(
        result.status.success(),
        "expected success; log: {}",
        result.log_path.display()
    );
    assert!(
        result.stdout.contains("govdir") || result.stdout.contains("gov_directory"),
        "missing version output; log: {}",
        result.log_path.display()
    );
}

#[test]
fn subcommand_help_flags_work() {
    for subcommand in ["list", "show", "committees", "validate", "split", "completions"] {
        let result = common::run_cli_case(
            &format!("subcommand_help_{subcommand}"),
            &[subcommand, "--help"],
        );
        assert!(
            result.status.success(),
            "{subcommand} --help failed; log: {}",
            result.log_path.display()
        );
    }
}

#[test]
fn list_shows_bundled_chambers() {
    let result = common::run_cli_case("list_shows_bundled_chambers", &["list", "--no-color"]);
    assert!(result.status.success());
    assert!(result.stdout.contains("senate"));
    assert!(result.stdout.contains("house-of-representatives"));
}

#[test]
fn list_json_is_machine_readable() {
    let result = common::run_cli_case("list_json_is_machine_readable", &["list", "--json"]);
    assert!(result.status.success());
    let payload: Value = serde_json::from_str(result.stdout.trim()).expect("valid JSON line");
    assert_eq!(payload["command"], "list");
    assert_eq!(payload["chambers"].as_array().map(Vec::len), Some(2));
}

#[test]
fn show_renders_chamber_page() {
    let result = common::run_cli_case("show_renders_chamber_page", &["show", "senate", "--no-color"]);
    assert!(result.status.success());
    assert!(result.stdout.contains("Senate of the Philippines"));
    assert!(result.stdout.contains("Permanent Committees"));
    assert!(result.stdout.contains("Chairperson:"));
    assert!(!result.stdout.contains("Chamber Not Found"));
}

#[test]
fn show_unknown_slug_is_not_found_not_an_error() {
    let result = common::run_cli_case(
        "show_unknown_slug_is_not_found",
        &["show", "nonexistent-chamber", "--no-color"],
    );
    assert!(
        result.status.success(),
        "not-found is a render state, not a failure; log: {}",
        result.log_path.display()
    );
    assert!(result.stdout.contains("Chamber Not Found"));
}

#[test]
fn show_json_reports_found_flag() {
    let result = common::run_cli_case(
        "show_json_reports_found_flag",
        &["show", "nonexistent-chamber", "--json"],
    );
    assert!(result.status.success());
    let payload: Value = serde_json::from_str(result.stdout.trim()).expect("valid JSON line");
    assert_eq!(payload["found"], false);
    assert_eq!(payload["result"]["page"], "not_found");

    let result = common::run_cli_case("show_json_found_chamber", &["show", "senate", "--json"]);
    let payload: Value = serde_json::from_str(result.stdout.trim()).expect("valid JSON line");
    assert_eq!(payload["found"], true);
    assert_eq!(payload["result"]["page"], "chamber");
    assert_eq!(
        payload["result"]["header"]["website"]["url"],
        "https://senate.gov.ph"
    );
}

#[test]
fn committees_search_filters_by_substring() {
    let result = common::run_cli_case(
        "committees_search_filters",
        &["committees", "--search", "fin", "--no-color"],
    );
    assert!(result.status.success());
    assert!(result.stdout.contains("Finance"));
    assert!(!result.stdout.contains("Foreign Relations"));
}

#[test]
fn committees_search_matches_chairpersons() {
    let result = common::run_cli_case(
        "committees_search_chairperson",
        &["committees", "--json", "--search", "poe"],
    );
    assert!(result.status.success());
    let payload: Value = serde_json::from_str(result.stdout.trim()).expect("valid JSON line");
    let hits = payload["committees"].as_array().expect("array");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["committee"], "Finance");
}

#[test]
fn committees_no_match_shows_empty_state() {
    let result = common::run_cli_case(
        "committees_no_match",
        &["committees", "--search", "zzz", "--no-color"],
    );
    assert!(result.status.success());
    assert!(result.stdout.contains("No committees found"));
}

#[test]
fn validate_accepts_the_bundled_fixture() {
    let result = common::run_cli_case("validate_bundled", &["validate", "--no-color"]);
    assert!(
        result.status.success(),
        "bundled fixture must be clean; log: {}",
        result.log_path.display()
    );
    assert!(result.stdout.contains("0 error(s)"));
}

#[test]
fn validate_rejects_duplicate_slugs_with_exit_code_one() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let fixture = tmp.path().join("bad.json");
    fs::write(
        &fixture,
        r#"[{"slug": "senate", "chamber": "A"}, {"slug": "senate", "chamber": "B"}]"#,
    )
    .expect("write fixture");

    let result = common::run_cli_case(
        "validate_duplicate_slugs",
        &[
            "validate",
            "--no-color",
            "--fixture",
            fixture.to_str().expect("utf8 path"),
        ],
    );
    assert_eq!(result.status.code(), Some(1));
    assert!(result.stdout.contains("duplicate slug"));
}

#[test]
fn split_writes_one_file_per_region_and_warns_on_missing_slugs() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("lgu.json");
    fs::write(
        &input,
        r#"[
            {"slug": "national-capital-region", "region": "NCR"},
            {"region": "Slugless Region"}
        ]"#,
    )
    .expect("write input");
    let out_dir = tmp.path().join("lgu");

    let result = common::run_cli_case(
        "split_writes_files",
        &[
            "split",
            input.to_str().expect("utf8 path"),
            out_dir.to_str().expect("utf8 path"),
        ],
    );
    assert!(result.status.success());
    assert!(result.stdout.contains("Wrote 1 region file(s)"));
    assert!(result.stderr.contains("Slugless Region"));
    assert!(out_dir.join("national-capital-region.json").exists());
}

#[test]
fn split_missing_input_fails_with_runtime_exit_code() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let result = common::run_cli_case(
        "split_missing_input",
        &[
            "split",
            tmp.path().join("absent.json").to_str().expect("utf8 path"),
            tmp.path().join("out").to_str().expect("utf8 path"),
        ],
    );
    assert_eq!(result.status.code(), Some(2));
}

// ──────────────────── full-pipeline library scenarios ────────────────────

fn collect_section_keys(node: &RenderNode, keys: &mut Vec<String>) {
    match node {
        RenderNode::SectionGroup { sections } => {
            for section in sections {
                keys.push(section.key.clone());
                collect_section_keys(&section.body, keys);
            }
        }
        RenderNode::List { items, .. } => {
            for item in items {
                collect_section_keys(item, keys);
            }
        }
        _ => {}
    }
}

#[test]
fn bundled_render_never_leaks_header_keys_into_body_sections() {
    let directory = Directory::load_bundled(true).expect("load");
    let renderer = DirectoryRenderer::default();

    for record in directory.chambers() {
        let view = renderer.render_chamber(record);
        let mut keys = Vec::new();
        collect_section_keys(&view.body, &mut keys);
        for key in &keys {
            assert!(
                !HEADER_KEYS.contains(&key.as_str()),
                "header key {key:?} leaked into body of {}",
                record.slug
            );
        }
    }
}

#[test]
fn bundled_render_reaches_nested_grids_and_blocks() {
    let directory = Directory::load_bundled(true).expect("load");
    let renderer = DirectoryRenderer::default();
    let PageView::Chamber(view) = renderer.render_page(&directory, "house-of-representatives")
    else {
        panic!("house must exist in the bundled fixture");
    };

    let mut keys = Vec::new();
    collect_section_keys(&view.body, &mut keys);
    assert!(keys.contains(&"leadership".to_string()));
    assert!(
        keys.contains(&"deputy_speakers".to_string()),
        "nested section group must be traversed: {keys:?}"
    );
}
