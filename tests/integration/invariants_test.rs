//! Workflow invariant tests
//!
//! Checks the properties that must hold for any brief length rather than a
//! single sample campaign.

use admock_projects::{StoryboardStyle, VersionLabel};
use tempfile::TempDir;

use crate::common::{audio, brief, new_workflow, run_full, test_config};

mod common;

const LENGTHS: [u32; 8] = [1, 4, 5, 7, 15, 30, 61, 120];

#[test]
fn test_concept_duration_matches_brief() {
    let dir = TempDir::new().unwrap();
    for length in LENGTHS {
        let mut workflow = new_workflow(&test_config(dir.path()));
        workflow.capture_brief(brief(length)).unwrap();
        let concept = workflow.create_concept().unwrap();

        assert_eq!(concept.storyboard.frames.len(), 5);
        assert!(
            (concept.storyboard.total_duration() - f64::from(length)).abs() <= 0.01,
            "length {length}"
        );
        assert!(concept.storyboard.frames.iter().all(|f| f.duration > 0.0));
    }
}

#[test]
fn test_timeline_covers_video_for_any_length() {
    let dir = TempDir::new().unwrap();
    for length in LENGTHS {
        let mut workflow = new_workflow(&test_config(dir.path()));
        run_full(&mut workflow, length).unwrap();
        let result = workflow.render_video(&audio()).unwrap();

        assert_eq!(result.timeline[0].start, 0.0);
        let last = result.timeline.last().unwrap();
        assert!(
            (last.start + last.duration - result.video.duration).abs() <= 0.01,
            "length {length}"
        );
    }
}

#[test]
fn test_repeated_locks_strictly_increase_label() {
    let dir = TempDir::new().unwrap();
    let mut workflow = new_workflow(&test_config(dir.path()));
    workflow.capture_brief(brief(15)).unwrap();
    workflow.create_concept().unwrap();

    let mut previous: Option<VersionLabel> = None;
    for _ in 0..5 {
        let label = workflow.lock_storyboard().unwrap().version;
        assert!(label.is_locked());
        if let Some(prev) = previous {
            assert_eq!(label.major(), prev.major() + 1);
        }
        previous = Some(label);
    }
}

#[test]
fn test_locked_versions_stay_locked() {
    let dir = TempDir::new().unwrap();
    let mut workflow = new_workflow(&test_config(dir.path()));
    run_full(&mut workflow, 15).unwrap();
    workflow.apply_global_edit("post-lock tweak").unwrap();
    workflow.create_concept().unwrap();

    let pencil_versions: Vec<_> = workflow
        .project()
        .storyboards
        .iter()
        .filter(|v| v.storyboard.style == StoryboardStyle::Pencil)
        .collect();
    assert!(pencil_versions[0].locked);
    assert!(!pencil_versions[1].locked);
}

#[test]
fn test_hifi_never_mutates_pencil_frames() {
    let dir = TempDir::new().unwrap();
    let mut workflow = new_workflow(&test_config(dir.path()));
    workflow.ingest_brand("Acme", "https://acme.example");
    workflow.capture_brief(brief(15)).unwrap();
    workflow.create_concept().unwrap();
    workflow.lock_storyboard().unwrap();
    let before = workflow.project().storyboards[0].storyboard.clone();

    workflow.render_hifi_storyboard().unwrap();
    workflow.render_hifi_storyboard().unwrap();

    let project = workflow.project();
    assert_eq!(project.storyboards[0].storyboard, before);
    assert_eq!(project.storyboards.len(), 3);
}

#[test]
fn test_audit_timestamps_never_decrease() {
    let dir = TempDir::new().unwrap();
    let mut workflow = new_workflow(&test_config(dir.path()));
    run_full(&mut workflow, 15).unwrap();
    for _ in 0..20 {
        workflow.apply_global_edit("tweak").unwrap();
    }

    let log = &workflow.project().audit_log;
    assert!(log.windows(2).all(|pair| pair[0].ts <= pair[1].ts));
}
