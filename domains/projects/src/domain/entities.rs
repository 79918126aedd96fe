//! Domain entities for the Projects domain
//!
//! This module contains the artifacts a workflow run produces: the brief and
//! brand tokens it starts from, pencil and hi-fi storyboards with their
//! versions, rendered videos, and the project aggregate that owns them all
//! together with its audit log.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use admock_common::{ensure_valid, Error, Result};

use crate::domain::state::{VersionEvent, VersionState, VersionStateMachine};
use crate::domain::version::VersionLabel;

// ============================================================================
// Inputs
// ============================================================================

/// Storyboards are rendered either as pencil sketches or hi-fi frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryboardStyle {
    Pencil,
    Hifi,
}

impl std::fmt::Display for StoryboardStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoryboardStyle::Pencil => write!(f, "pencil"),
            StoryboardStyle::Hifi => write!(f, "hifi"),
        }
    }
}

/// Logo placement guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandLogo {
    pub url: String,
    pub safe_area: String,
}

/// Tone of voice and the phrasing to avoid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandVoice {
    pub tone: String,
    pub donts: Vec<String>,
}

/// Distilled design language for a brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandTokens {
    pub brand: String,
    pub url: String,
    pub colors: BTreeMap<String, String>,
    pub typography: BTreeMap<String, String>,
    pub logo: BrandLogo,
    pub voice: BrandVoice,
}

/// Campaign parameters supplied by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Brief {
    pub audience: String,
    #[validate(length(min = 1))]
    pub objective: String,
    pub url: String,
    #[validate(range(min = 1))]
    pub ad_length_seconds: u32,
    #[validate(length(min = 1))]
    pub platform: String,
    #[validate(length(min = 1))]
    pub tone: String,
    pub constraints: Option<String>,
    pub languages: Option<Vec<String>>,
}

impl Brief {
    pub fn new(
        audience: impl Into<String>,
        objective: impl Into<String>,
        url: impl Into<String>,
        ad_length_seconds: u32,
        platform: impl Into<String>,
        tone: impl Into<String>,
    ) -> Self {
        Self {
            audience: audience.into(),
            objective: objective.into(),
            url: url.into(),
            ad_length_seconds,
            platform: platform.into(),
            tone: tone.into(),
            constraints: None,
            languages: None,
        }
    }

    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = Some(languages);
        self
    }

    /// Check the brief can drive concept generation
    pub fn ensure_valid(&self) -> Result<()> {
        ensure_valid(self)
    }
}

/// Voice-over and music characteristics for video synthesis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AudioProfile {
    pub voice_style: String,
    pub music_style: String,
    #[validate(range(exclusive_min = 0.0))]
    pub voice_speed: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub voice_pitch: f64,
}

impl AudioProfile {
    pub fn new(voice_style: impl Into<String>, music_style: impl Into<String>) -> Self {
        Self {
            voice_style: voice_style.into(),
            music_style: music_style.into(),
            voice_speed: 1.0,
            voice_pitch: 1.0,
        }
    }

    pub fn with_voice_speed(mut self, speed: f64) -> Self {
        self.voice_speed = speed;
        self
    }

    pub fn with_voice_pitch(mut self, pitch: f64) -> Self {
        self.voice_pitch = pitch;
        self
    }

    pub fn ensure_valid(&self) -> Result<()> {
        ensure_valid(self)
    }
}

// ============================================================================
// Storyboards
// ============================================================================

/// Single storyboard frame shared by pencil and hi-fi boards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: String,
    pub beat: String,
    pub voice_over: String,
    pub on_screen_text: String,
    pub camera: String,
    pub duration: f64,
    pub notes: Vec<String>,
    pub sketch_asset: Option<String>,
    pub hifi_asset: Option<String>,
    pub music_cue: Option<String>,
}

impl Frame {
    /// Create a new frame with validation
    pub fn new(
        id: impl Into<String>,
        beat: impl Into<String>,
        voice_over: impl Into<String>,
        on_screen_text: impl Into<String>,
        camera: impl Into<String>,
        duration: f64,
    ) -> Result<Self> {
        let id = id.into();
        if !duration.is_finite() || duration <= 0.0 {
            return Err(Error::Validation(format!(
                "Frame {} duration must be positive, got {}",
                id, duration
            )));
        }

        Ok(Frame {
            id,
            beat: beat.into(),
            voice_over: voice_over.into(),
            on_screen_text: on_screen_text.into(),
            camera: camera.into(),
            duration,
            notes: Vec::new(),
            sketch_asset: None,
            hifi_asset: None,
            music_cue: None,
        })
    }

    pub fn with_sketch_asset(mut self, asset: impl Into<String>) -> Self {
        self.sketch_asset = Some(asset.into());
        self
    }

    pub fn with_music_cue(mut self, cue: impl Into<String>) -> Self {
        self.music_cue = Some(cue.into());
        self
    }

    /// Record an edit note for the frame. Notes are never removed.
    pub fn apply_edit(&mut self, description: impl Into<String>) {
        self.notes.push(description.into());
    }
}

/// Ordered frames representing one ad narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storyboard {
    pub id: String,
    pub style: StoryboardStyle,
    pub frames: Vec<Frame>,
    pub narrative: String,
    pub risks: Vec<String>,
    pub alt_hooks: Vec<String>,
}

impl Storyboard {
    /// Total length derived from the frames, computed on every call
    pub fn total_duration(&self) -> f64 {
        self.frames.iter().map(|frame| frame.duration).sum()
    }

    pub fn get_frame(&self, frame_id: &str) -> Result<&Frame> {
        self.frames
            .iter()
            .find(|frame| frame.id == frame_id)
            .ok_or_else(|| self.missing_frame(frame_id))
    }

    pub fn get_frame_mut(&mut self, frame_id: &str) -> Result<&mut Frame> {
        let missing = self.missing_frame(frame_id);
        self.frames
            .iter_mut()
            .find(|frame| frame.id == frame_id)
            .ok_or(missing)
    }

    fn missing_frame(&self, frame_id: &str) -> Error {
        Error::NotFound(format!(
            "Frame {} not found in storyboard {}",
            frame_id, self.id
        ))
    }
}

/// A registered, timestamped, lockable storyboard snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryboardVersion {
    pub storyboard: Storyboard,
    pub version: VersionLabel,
    pub locked: bool,
    pub created_at: DateTime<Utc>,
}

impl StoryboardVersion {
    pub fn new(storyboard: Storyboard, version: VersionLabel) -> Self {
        Self {
            storyboard,
            version,
            locked: false,
            created_at: Utc::now(),
        }
    }

    pub fn state(&self) -> VersionState {
        if self.locked {
            VersionState::Locked
        } else {
            VersionState::Draft
        }
    }

    /// Lock the version and rewrite its label. Re-locking bumps the label again.
    pub fn lock(&mut self) -> Result<()> {
        let next = self.apply_transition(VersionEvent::Lock)?;
        self.locked = next == VersionState::Locked;
        self.version = self.version.bump_locked();
        Ok(())
    }

    /// Fail unless a hi-fi storyboard may be derived from this version
    pub fn ensure_promotable(&self) -> Result<()> {
        self.apply_transition(VersionEvent::Promote).map(|_| ())
    }

    fn apply_transition(&self, event: VersionEvent) -> Result<VersionState> {
        VersionStateMachine::transition(self.state(), event)
            .map_err(|e| e.into_error("storyboard version"))
    }
}

// ============================================================================
// Outputs
// ============================================================================

/// Final render derived from a hi-fi storyboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoOutput {
    pub storyboard_id: String,
    pub media_url: String,
    pub subtitle_url: String,
    pub alt_voiceovers: Vec<String>,
    pub duration: f64,
}

// ============================================================================
// Audit Log
// ============================================================================

/// Names of audited workflow operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventKind {
    BrandExtracted,
    BriefCaptured,
    StoryboardCreated,
    GlobalEdit,
    FrameEdit,
    StoryboardLocked,
    HifiRendered,
    VideoRendered,
}

impl std::fmt::Display for AuditEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BrandExtracted => write!(f, "BRAND_EXTRACTED"),
            Self::BriefCaptured => write!(f, "BRIEF_CAPTURED"),
            Self::StoryboardCreated => write!(f, "STORYBOARD_CREATED"),
            Self::GlobalEdit => write!(f, "GLOBAL_EDIT"),
            Self::FrameEdit => write!(f, "FRAME_EDIT"),
            Self::StoryboardLocked => write!(f, "STORYBOARD_LOCKED"),
            Self::HifiRendered => write!(f, "HIFI_RENDERED"),
            Self::VideoRendered => write!(f, "VIDEO_RENDERED"),
        }
    }
}

/// One audit log entry, serialized flat as `{event, ...payload, ts}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub event: AuditEventKind,
    #[serde(flatten)]
    pub payload: BTreeMap<String, String>,
    pub ts: DateTime<Utc>,
}

// ============================================================================
// Project
// ============================================================================

/// Aggregate root for everything a workflow run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub owner: String,
    pub brand_tokens: Option<BrandTokens>,
    pub brief: Option<Brief>,
    pub storyboards: Vec<StoryboardVersion>,
    pub video_outputs: Vec<VideoOutput>,
    pub audit_log: Vec<AuditEvent>,
}

impl Project {
    /// Create a project with a freshly minted id
    pub fn new(owner: impl Into<String>) -> Self {
        Self::with_id(format!("proj_{}", Uuid::new_v4().simple()), owner)
    }

    pub fn with_id(id: impl Into<String>, owner: impl Into<String>) -> Self {
        Project {
            id: id.into(),
            owner: owner.into(),
            brand_tokens: None,
            brief: None,
            storyboards: Vec::new(),
            video_outputs: Vec::new(),
            audit_log: Vec::new(),
        }
    }

    /// Append an audit entry. Timestamps never go backwards even if the wall clock does.
    pub fn log_event(&mut self, event: AuditEventKind, payload: &[(&str, &str)]) {
        let now = Utc::now();
        let ts = match self.audit_log.last() {
            Some(last) if last.ts > now => last.ts,
            _ => now,
        };

        self.audit_log.push(AuditEvent {
            event,
            payload: payload
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            ts,
        });
    }

    /// Append a new unlocked version; registration order is creation order
    pub fn register_storyboard(
        &mut self,
        storyboard: Storyboard,
        version: VersionLabel,
    ) -> &StoryboardVersion {
        self.storyboards.push(StoryboardVersion::new(storyboard, version));
        &self.storyboards[self.storyboards.len() - 1]
    }

    /// Id for the next storyboard: `sb_{N}` with N = registered versions + 1
    pub fn next_storyboard_id(&self) -> String {
        format!("sb_{}", self.storyboards.len() + 1)
    }

    /// Most recently registered version of `style`
    pub fn current_version(&self, style: StoryboardStyle) -> Result<&StoryboardVersion> {
        self.storyboards
            .iter()
            .rev()
            .find(|version| version.storyboard.style == style)
            .ok_or_else(|| Self::missing_style(style))
    }

    pub fn current_version_mut(
        &mut self,
        style: StoryboardStyle,
    ) -> Result<&mut StoryboardVersion> {
        self.storyboards
            .iter_mut()
            .rev()
            .find(|version| version.storyboard.style == style)
            .ok_or_else(|| Self::missing_style(style))
    }

    /// All registered storyboards in registration order
    pub fn storyboards(&self) -> impl Iterator<Item = &Storyboard> {
        self.storyboards.iter().map(|version| &version.storyboard)
    }

    fn missing_style(style: StoryboardStyle) -> Error {
        Error::NotFound(format!("No storyboard with style {} available", style))
    }
}

// ============================================================================
// Tests
// ============================================================================
