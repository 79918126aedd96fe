//! AdMock Studio composition root
//!
//! Wires the deterministic collaborators into a workflow and replays the
//! sample campaign end to end.

use std::path::PathBuf;

use admock_common::Config;
use admock_projects::{AudioProfile, Brief, Project};
use admock_workflow::{StudioServices, Workflow};
use tracing::info;

/// Build a workflow for `project` with services configured from `config`
pub fn create_workflow(config: &Config, project: Project) -> Workflow {
    Workflow::new(project, StudioServices::from_config(config))
}

/// Replay the sample campaign and export its artifacts
///
/// Acme, a 15 second YouTube brief for new parents, one frame edit, then
/// lock, hi-fi, video and export.
pub fn run_demo(config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let mut workflow = create_workflow(config, Project::with_id("proj_001", "user_123"));

    workflow.ingest_brand("Acme", "https://acme.example");
    workflow.capture_brief(Brief::new(
        "New parents",
        "Awareness",
        "https://acme.example",
        15,
        "YouTube",
        "warm",
    ))?;
    workflow.create_concept()?;
    workflow.apply_frame_edit("f1", "Introduce mascot in the opening shot")?;
    workflow.lock_storyboard()?;
    workflow.render_hifi_storyboard()?;
    workflow.render_video(&AudioProfile::new("neutral", "acoustic"))?;

    let exported = workflow.export()?;
    info!(
        project_id = %workflow.project().id,
        artifacts = exported.len(),
        "Demo campaign exported"
    );
    Ok(exported)
}
