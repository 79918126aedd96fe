//! Workflow orchestrator
//!
//! Owns one project and drives it through the stages. Preconditions are
//! checked before any collaborator call or mutation, so a failed operation
//! leaves the project untouched. Every successful operation except `export`
//! appends exactly one audit event.

use std::path::PathBuf;

use admock_brand::BrandExtractionResult;
use admock_common::{Error, Result};
use admock_projects::{
    AudioProfile, AuditEventKind, Brief, Project, Storyboard, StoryboardStyle, StoryboardVersion,
    VersionLabel,
};
use admock_video::VideoSynthesisResult;

use crate::services::StudioServices;
use crate::snapshot::WorkflowSnapshot;

/// Single-project, single-caller orchestrator
#[derive(Debug)]
pub struct Workflow {
    project: Project,
    services: StudioServices,
    /// Last number used to mint a `sb_v{K}` label, shared across styles
    version_counter: u32,
}

impl Workflow {
    pub fn new(project: Project, services: StudioServices) -> Self {
        Self {
            project,
            services,
            version_counter: 0,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn into_project(self) -> Project {
        self.project
    }

    /// Latest artifact of each stage
    pub fn snapshot(&self) -> WorkflowSnapshot<'_> {
        WorkflowSnapshot::of(&self.project)
    }

    // ------------------------------------------------------------------------
    // Step 1: brand grounding and brief
    // ------------------------------------------------------------------------

    /// Extract brand tokens for `url`, replacing any held by the project
    pub fn ingest_brand(&mut self, brand: &str, url: &str) -> BrandExtractionResult {
        let result = self.services.brand_extractor.extract(brand, url);
        for warning in &result.warnings {
            tracing::warn!(project_id = %self.project.id, brand, %warning, "Brand extraction warning");
        }

        self.project.brand_tokens = Some(result.tokens.clone());
        self.project
            .log_event(AuditEventKind::BrandExtracted, &[("url", url)]);

        tracing::info!(project_id = %self.project.id, brand, url, "Brand extracted");
        result
    }

    /// Store the brief, replacing any earlier one
    pub fn capture_brief(&mut self, brief: Brief) -> Result<()> {
        if let Err(e) = brief.ensure_valid() {
            tracing::warn!(project_id = %self.project.id, error = %e, "Rejected brief");
            return Err(e);
        }

        let objective = brief.objective.clone();
        self.project.brief = Some(brief);
        self.project
            .log_event(AuditEventKind::BriefCaptured, &[("objective", &objective)]);

        tracing::info!(project_id = %self.project.id, %objective, "Brief captured");
        Ok(())
    }

    /// Generate a pencil storyboard from the brief and register it unlocked
    pub fn create_concept(&mut self) -> Result<&StoryboardVersion> {
        let brief = self.project.brief.as_ref().ok_or_else(|| {
            precondition(
                "create_concept",
                "Brief must be captured before generating concept",
            )
        })?;

        let generator = &self.services.storyboard_generator;
        let shot_list =
            generator.generate_shot_list(brief.ad_length_seconds, &brief.platform, &brief.tone)?;
        let storyboard = generator.create_storyboard(&self.project.next_storyboard_id(), shot_list);

        let storyboard_id = storyboard.id.clone();
        let label = self.next_version_label();
        self.project.register_storyboard(storyboard, label);
        self.project.log_event(
            AuditEventKind::StoryboardCreated,
            &[("storyboard_id", &storyboard_id)],
        );

        tracing::info!(
            project_id = %self.project.id,
            %storyboard_id,
            version = %label,
            "Storyboard concept created"
        );
        self.project.current_version(StoryboardStyle::Pencil)
    }

    // ------------------------------------------------------------------------
    // Step 2: pencil edits and lock
    // ------------------------------------------------------------------------

    /// Add an edit note to every frame of the current pencil storyboard
    pub fn apply_global_edit(&mut self, description: &str) -> Result<()> {
        let version = self.project.current_version_mut(StoryboardStyle::Pencil)?;
        self.services
            .storyboard_generator
            .apply_global_edit(&mut version.storyboard, description);
        let storyboard_id = version.storyboard.id.clone();

        self.project
            .log_event(AuditEventKind::GlobalEdit, &[("description", description)]);

        tracing::info!(project_id = %self.project.id, %storyboard_id, description, "Global edit applied");
        Ok(())
    }

    /// Add an edit note to one frame of the current pencil storyboard
    pub fn apply_frame_edit(&mut self, frame_id: &str, description: &str) -> Result<()> {
        let version = self.project.current_version_mut(StoryboardStyle::Pencil)?;
        self.services.storyboard_generator.apply_frame_edit(
            &mut version.storyboard,
            frame_id,
            description,
        )?;
        let storyboard_id = version.storyboard.id.clone();

        self.project.log_event(
            AuditEventKind::FrameEdit,
            &[("frame_id", frame_id), ("description", description)],
        );

        tracing::info!(
            project_id = %self.project.id,
            %storyboard_id,
            frame_id,
            description,
            "Frame edit applied"
        );
        Ok(())
    }

    /// Lock the current pencil version. Re-locking is allowed and bumps the label again.
    pub fn lock_storyboard(&mut self) -> Result<&StoryboardVersion> {
        let version = self.project.current_version_mut(StoryboardStyle::Pencil)?;
        version.lock()?;
        let storyboard_id = version.storyboard.id.clone();
        let label = version.version;

        self.project.log_event(
            AuditEventKind::StoryboardLocked,
            &[("storyboard_id", &storyboard_id)],
        );

        tracing::info!(
            project_id = %self.project.id,
            %storyboard_id,
            version = %label,
            "Storyboard locked"
        );
        self.project.current_version(StoryboardStyle::Pencil)
    }

    // ------------------------------------------------------------------------
    // Step 3: hi-fi storyboard
    // ------------------------------------------------------------------------

    /// Derive a hi-fi storyboard from the locked pencil version and register it
    pub fn render_hifi_storyboard(&mut self) -> Result<&StoryboardVersion> {
        let brand_tokens = self.project.brand_tokens.as_ref().ok_or_else(|| {
            precondition(
                "render_hifi_storyboard",
                "Brand tokens required before rendering hi-fi storyboard",
            )
        })?;
        let pencil = self
            .project
            .current_version(StoryboardStyle::Pencil)
            .map_err(|_| {
                precondition(
                    "render_hifi_storyboard",
                    "A pencil storyboard must be created and locked before hi-fi render",
                )
            })?;
        if let Err(e) = pencil.ensure_promotable() {
            tracing::warn!(
                project_id = %self.project.id,
                operation = "render_hifi_storyboard",
                error = %e,
                "Precondition failed"
            );
            return Err(e);
        }

        let hifi = self
            .services
            .hifi_renderer
            .render(&pencil.storyboard, brand_tokens);

        let storyboard_id = hifi.id.clone();
        let label = self.next_version_label();
        self.project.register_storyboard(hifi, label);
        self.project.log_event(
            AuditEventKind::HifiRendered,
            &[("storyboard_id", &storyboard_id)],
        );

        tracing::info!(
            project_id = %self.project.id,
            %storyboard_id,
            version = %label,
            "Hi-fi storyboard rendered"
        );
        self.project.current_version(StoryboardStyle::Hifi)
    }

    // ------------------------------------------------------------------------
    // Step 4: video
    // ------------------------------------------------------------------------

    /// Render the current hi-fi storyboard to video
    pub fn render_video(&mut self, audio: &AudioProfile) -> Result<VideoSynthesisResult> {
        let hifi = self.project.current_version(StoryboardStyle::Hifi)?;
        audio.ensure_valid()?;

        let result = self
            .services
            .video_synthesizer
            .render(&hifi.storyboard, audio);
        let storyboard_id = hifi.storyboard.id.clone();

        self.project.video_outputs.push(result.video.clone());
        self.project.log_event(
            AuditEventKind::VideoRendered,
            &[("storyboard_id", &storyboard_id)],
        );

        tracing::info!(
            project_id = %self.project.id,
            %storyboard_id,
            duration = result.video.duration,
            media_url = %result.video.media_url,
            "Video rendered"
        );
        Ok(result)
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    /// Write the project and every registered storyboard through the exporter
    pub fn export(&self) -> Result<Vec<PathBuf>> {
        let storyboards: Vec<&Storyboard> = self.project.storyboards().collect();
        let paths = self.services.exporter.bundle(&self.project, &storyboards)?;
        Ok(paths)
    }

    fn next_version_label(&mut self) -> VersionLabel {
        self.version_counter += 1;
        VersionLabel::new(self.version_counter)
    }
}

fn precondition(operation: &'static str, message: &str) -> Error {
    tracing::warn!(operation, "Precondition failed: {}", message);
    Error::Precondition(message.to_string())
}
