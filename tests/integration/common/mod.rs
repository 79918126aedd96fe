//! Shared fixtures for workflow integration tests

#![allow(dead_code)]

use std::path::Path;

use admock_common::Config;
use admock_projects::{AudioProfile, Brief, Project};
use admock_workflow::Workflow;

/// Config whose exporter writes under `export_dir`
pub fn test_config(export_dir: &Path) -> Config {
    Config {
        export_dir: export_dir.to_path_buf(),
        ..Config::default()
    }
}

pub fn new_workflow(config: &Config) -> Workflow {
    admock_app::create_workflow(config, Project::with_id("proj_it", "user_it"))
}

pub fn brief(length_seconds: u32) -> Brief {
    Brief::new(
        "New parents",
        "Awareness",
        "https://acme.example",
        length_seconds,
        "YouTube",
        "warm",
    )
}

pub fn audio() -> AudioProfile {
    AudioProfile::new("neutral", "acoustic")
}

/// Drive a workflow through every stage with a brief of `length_seconds`
pub fn run_full(workflow: &mut Workflow, length_seconds: u32) -> anyhow::Result<()> {
    workflow.ingest_brand("Acme", "https://acme.example");
    workflow.capture_brief(brief(length_seconds))?;
    workflow.create_concept()?;
    workflow.apply_global_edit("Increase brightness")?;
    workflow.apply_frame_edit("f1", "Introduce mascot in the opening shot")?;
    workflow.lock_storyboard()?;
    workflow.render_hifi_storyboard()?;
    workflow.render_video(&audio())?;
    Ok(())
}
