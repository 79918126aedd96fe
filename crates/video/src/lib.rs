//! AdMock Video Service
//!
//! Video synthesis for the final workflow stage:
//! - `VideoSynthesizer`: contract consumed by the workflow
//! - `StitchingVideoSynthesizer`: lays frames end to end on a timeline

pub mod stitch;

pub use stitch::StitchingVideoSynthesizer;

use admock_projects::{AudioProfile, Storyboard, VideoOutput};
use serde::{Deserialize, Serialize};

/// Placement of one frame in the rendered video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub frame_id: String,
    /// Seconds from the start of the video
    pub start: f64,
    pub duration: f64,
    pub camera: String,
}

/// Outcome of a render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSynthesisResult {
    pub video: VideoOutput,
    pub timeline: Vec<TimelineEntry>,
}

/// Video synthesis contract
pub trait VideoSynthesizer: Send + Sync {
    fn render(&self, storyboard: &Storyboard, audio: &AudioProfile) -> VideoSynthesisResult;
}
