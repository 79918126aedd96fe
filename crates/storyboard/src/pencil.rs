//! Beat-based pencil storyboard generator
//!
//! Every ad follows the same five beats. The brief length is split evenly
//! across them, with the last beat absorbing the rounding remainder.

use admock_common::Result;
use admock_projects::Frame;

use crate::{ShotList, StoryboardGenerator};

/// Narrative beats in order
pub const BEATS: [&str; 5] = ["Hook", "Problem", "Solution", "Proof", "CTA"];

/// Deterministic shot list planner
#[derive(Debug, Clone, Default)]
pub struct BeatStoryboardGenerator;

impl BeatStoryboardGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Split `total` seconds over `count` frames, rounded to hundredths
pub fn distribute_duration(total: u32, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let total = f64::from(total);
    let base = total / count as f64;
    (0..count)
        .map(|i| {
            if i + 1 < count {
                round2(base)
            } else {
                round2(total - base * (count - 1) as f64)
            }
        })
        .collect()
}

impl StoryboardGenerator for BeatStoryboardGenerator {
    fn generate_shot_list(
        &self,
        length_seconds: u32,
        platform: &str,
        tone: &str,
    ) -> Result<ShotList> {
        tracing::debug!(length_seconds, platform, tone, "Generating shot list");

        let durations = distribute_duration(length_seconds, BEATS.len());
        let frames = BEATS
            .iter()
            .zip(durations)
            .enumerate()
            .map(|(idx, (beat, duration))| -> Result<Frame> {
                let frame_id = format!("f{}", idx + 1);
                let camera = if *beat == "Hook" { "push-in" } else { "cut" };
                let frame = Frame::new(
                    frame_id.as_str(),
                    *beat,
                    format!("{} voice over tailored for {} with {} tone.", beat, platform, tone),
                    format!("{} message", beat),
                    camera,
                    duration,
                )?
                .with_sketch_asset(format!("assets/pencil/{}.png", frame_id));

                // The opening frame plays without music.
                Ok(if idx > 0 {
                    frame.with_music_cue("warm")
                } else {
                    frame
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ShotList {
            narrative: "Problem → Solution → Proof → CTA".to_string(),
            frames,
            risks: vec!["Ensure CTA is platform compliant".to_string()],
            alt_hooks: vec!["Alternate hook emphasising emotional benefit".to_string()],
        })
    }
}
