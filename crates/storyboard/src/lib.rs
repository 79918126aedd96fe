//! AdMock Storyboard Services
//!
//! Storyboard generation for both stages that produce boards:
//! - `StoryboardGenerator`: shot list planning, pencil storyboards and edit notes
//! - `HifiRenderer`: derives a hi-fi storyboard from a locked pencil one
//!
//! Image generation is out of scope; frames carry symbolic asset paths that
//! stand in for sketches and renders.

pub mod hifi;
pub mod pencil;

pub use hifi::BrandedHifiRenderer;
pub use pencil::BeatStoryboardGenerator;

use admock_common::Result;
use admock_projects::{BrandTokens, Frame, Storyboard, StoryboardStyle};
use serde::{Deserialize, Serialize};

/// Intermediate representation for storyboard planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotList {
    pub narrative: String,
    pub frames: Vec<Frame>,
    pub risks: Vec<String>,
    pub alt_hooks: Vec<String>,
}

/// Pencil storyboard contract
pub trait StoryboardGenerator: Send + Sync {
    /// Plan the frames for an ad of `length_seconds` on `platform`
    fn generate_shot_list(
        &self,
        length_seconds: u32,
        platform: &str,
        tone: &str,
    ) -> Result<ShotList>;

    fn create_storyboard(&self, storyboard_id: &str, shot_list: ShotList) -> Storyboard {
        Storyboard {
            id: storyboard_id.to_string(),
            style: StoryboardStyle::Pencil,
            frames: shot_list.frames,
            narrative: shot_list.narrative,
            risks: shot_list.risks,
            alt_hooks: shot_list.alt_hooks,
        }
    }

    /// Append `description` to the notes of every frame
    fn apply_global_edit(&self, storyboard: &mut Storyboard, description: &str) {
        for frame in storyboard.frames.iter_mut() {
            frame.apply_edit(description);
        }
    }

    /// Append `description` to one frame; fails with `NotFound` if the frame is absent
    fn apply_frame_edit(
        &self,
        storyboard: &mut Storyboard,
        frame_id: &str,
        description: &str,
    ) -> Result<()> {
        storyboard.get_frame_mut(frame_id)?.apply_edit(description);
        Ok(())
    }
}

/// Hi-fi render contract: a pure transform producing a new object graph
pub trait HifiRenderer: Send + Sync {
    fn render(&self, pencil: &Storyboard, brand_tokens: &BrandTokens) -> Storyboard;
}
