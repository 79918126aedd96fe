//! End-to-end workflow tests
//!
//! Drives a project through brand grounding, concept, edits, lock, hi-fi and
//! video with the deterministic collaborators and checks the artifacts each
//! stage leaves behind.

use admock_common::Error;
use admock_projects::{AuditEventKind, StoryboardStyle};
use tempfile::TempDir;

use crate::common::{audio, brief, new_workflow, run_full, test_config};

mod common;

#[test]
fn test_fifteen_second_campaign_end_to_end() {
    let dir = TempDir::new().unwrap();
    let mut workflow = new_workflow(&test_config(dir.path()));

    // ============================================================================
    // Step 1: Brand grounding and brief
    // ============================================================================
    let extraction = workflow.ingest_brand("Acme", "https://acme.example");
    assert_eq!(extraction.tokens.brand, "Acme");
    assert!(!extraction.warnings.is_empty());
    workflow.capture_brief(brief(15)).unwrap();

    // ============================================================================
    // Step 2: Concept, edits and lock
    // ============================================================================
    let concept = workflow.create_concept().unwrap();
    assert_eq!(concept.storyboard.frames.len(), 5);
    assert!((concept.storyboard.total_duration() - 15.0).abs() <= 0.01);
    assert!(!concept.locked);

    workflow
        .apply_frame_edit("f1", "Introduce mascot in the opening shot")
        .unwrap();

    let locked = workflow.lock_storyboard().unwrap();
    assert!(locked.locked);
    let label = locked.version.to_string();
    assert!(label.starts_with("sb_v") && label.ends_with("_locked"), "{label}");
    assert_eq!(
        locked.storyboard.get_frame("f1").unwrap().notes,
        vec!["Introduce mascot in the opening shot"]
    );

    // ============================================================================
    // Step 3: Hi-fi storyboard
    // ============================================================================
    let hifi = workflow.render_hifi_storyboard().unwrap();
    assert_eq!(hifi.storyboard.style, StoryboardStyle::Hifi);
    assert_eq!(hifi.storyboard.frames.len(), 5);
    for frame in &hifi.storyboard.frames {
        let asset = frame.hifi_asset.as_deref().unwrap_or_default();
        assert!(!asset.is_empty(), "frame {} has no hi-fi asset", frame.id);
    }
    let hifi_total = hifi.storyboard.total_duration();

    // ============================================================================
    // Step 4: Video
    // ============================================================================
    let result = workflow.render_video(&audio()).unwrap();
    assert_eq!(result.timeline.len(), 5);
    assert!((result.video.duration - hifi_total).abs() <= 0.01);

    let last = result.timeline.last().unwrap();
    assert!((last.start + last.duration - result.video.duration).abs() <= 0.01);
    assert!(result
        .timeline
        .windows(2)
        .all(|pair| pair[0].start < pair[1].start));

    let project = workflow.project();
    assert_eq!(project.video_outputs.len(), 1);
    assert_eq!(project.audit_log.len(), 7);
}

#[test]
fn test_every_operation_appends_one_audit_event() {
    let dir = TempDir::new().unwrap();
    let mut workflow = new_workflow(&test_config(dir.path()));
    run_full(&mut workflow, 30).unwrap();

    let events: Vec<AuditEventKind> = workflow
        .project()
        .audit_log
        .iter()
        .map(|entry| entry.event)
        .collect();
    assert_eq!(
        events,
        vec![
            AuditEventKind::BrandExtracted,
            AuditEventKind::BriefCaptured,
            AuditEventKind::StoryboardCreated,
            AuditEventKind::GlobalEdit,
            AuditEventKind::FrameEdit,
            AuditEventKind::StoryboardLocked,
            AuditEventKind::HifiRendered,
            AuditEventKind::VideoRendered,
        ]
    );

    workflow.export().unwrap();
    assert_eq!(workflow.project().audit_log.len(), 8);
}

#[test]
fn test_stages_cannot_be_skipped() {
    let dir = TempDir::new().unwrap();
    let mut workflow = new_workflow(&test_config(dir.path()));

    assert!(matches!(
        workflow.create_concept(),
        Err(Error::Precondition(_))
    ));
    assert!(matches!(workflow.lock_storyboard(), Err(Error::NotFound(_))));
    assert!(matches!(
        workflow.render_hifi_storyboard(),
        Err(Error::Precondition(_))
    ));
    assert!(matches!(
        workflow.render_video(&audio()),
        Err(Error::NotFound(_))
    ));

    workflow.ingest_brand("Acme", "https://acme.example");
    workflow.capture_brief(brief(15)).unwrap();
    workflow.create_concept().unwrap();
    assert!(matches!(
        workflow.render_hifi_storyboard(),
        Err(Error::Precondition(_))
    ));

    assert_eq!(workflow.project().audit_log.len(), 3);
}

#[test]
fn test_project_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let mut workflow = new_workflow(&test_config(dir.path()));
    run_full(&mut workflow, 20).unwrap();

    let project = workflow.into_project();
    let json = serde_json::to_string(&project).unwrap();
    let back: admock_projects::Project = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, project.id);
    assert_eq!(back.brand_tokens, project.brand_tokens);
    assert_eq!(back.brief, project.brief);
    assert_eq!(back.audit_log, project.audit_log);

    let labels = |p: &admock_projects::Project| -> Vec<(String, String, bool)> {
        p.storyboards
            .iter()
            .map(|v| (v.storyboard.id.clone(), v.version.to_string(), v.locked))
            .collect()
    };
    assert_eq!(labels(&back), labels(&project));
}
