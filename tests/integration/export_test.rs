//! Export integration tests
//!
//! Verifies the filesystem bundle written for a finished project.

use std::fs;

use tempfile::TempDir;

use crate::common::{new_workflow, run_full, test_config};

mod common;

#[test]
fn test_export_writes_project_json_and_storyboard_docs() {
    let dir = TempDir::new().unwrap();
    let mut workflow = new_workflow(&test_config(dir.path()));
    run_full(&mut workflow, 15).unwrap();

    let paths = workflow.export().unwrap();
    assert_eq!(paths.len(), 1 + workflow.project().storyboards.len());
    assert!(paths.iter().all(|p| p.starts_with(dir.path())));

    let payload: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths[0]).unwrap()).unwrap();
    assert_eq!(payload["id"], workflow.project().id);
    assert_eq!(payload["audit_log"][0]["event"], "BRAND_EXTRACTED");
    assert_eq!(payload["audit_log"][0]["url"], "https://acme.example");

    let docs: Vec<_> = paths[1..]
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(docs, vec!["sb_1.md", "sb_1-hifi.md"]);

    let pencil_doc = fs::read_to_string(&paths[1]).unwrap();
    assert!(pencil_doc.starts_with("# Storyboard sb_1\n\n"));
    assert!(pencil_doc.contains("## Frame f1 – Hook\n"));
}

#[test]
fn test_export_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("campaigns").join("acme");
    let mut workflow = new_workflow(&test_config(&nested));
    run_full(&mut workflow, 15).unwrap();

    let paths = workflow.export().unwrap();
    assert!(nested.is_dir());
    assert!(paths.iter().all(|p| p.exists()));
}

#[test]
fn test_export_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let mut workflow = new_workflow(&test_config(dir.path()));
    run_full(&mut workflow, 15).unwrap();

    let first = workflow.export().unwrap();
    let second = workflow.export().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_demo_driver_exports_sample_campaign() {
    let dir = TempDir::new().unwrap();
    let paths = admock_app::run_demo(&test_config(dir.path())).unwrap();
    assert_eq!(paths.len(), 3);
    assert!(paths[0].ends_with("proj_001.json"));
}
