//! Stitching video synthesizer
//!
//! Frames play back to back in storyboard order. Offsets and the total are
//! rounded to hundredths, matching the precision of frame durations.

use admock_projects::{AudioProfile, Storyboard, VideoOutput};

use crate::{TimelineEntry, VideoSynthesisResult, VideoSynthesizer};

/// Voice-over variants offered with every render
pub const VOICE_VARIANTS: [&str; 3] = ["neutral", "warm", "energetic"];

#[derive(Debug, Clone, Default)]
pub struct StitchingVideoSynthesizer;

impl StitchingVideoSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl VideoSynthesizer for StitchingVideoSynthesizer {
    fn render(&self, storyboard: &Storyboard, audio: &AudioProfile) -> VideoSynthesisResult {
        tracing::debug!(
            storyboard_id = %storyboard.id,
            voice_style = %audio.voice_style,
            music_style = %audio.music_style,
            "Stitching video"
        );

        let mut elapsed = 0.0;
        let timeline = storyboard
            .frames
            .iter()
            .map(|frame| {
                let entry = TimelineEntry {
                    frame_id: frame.id.clone(),
                    start: round2(elapsed),
                    duration: frame.duration,
                    camera: frame.camera.clone(),
                };
                elapsed += frame.duration;
                entry
            })
            .collect();

        let video = VideoOutput {
            storyboard_id: storyboard.id.clone(),
            media_url: format!("renders/{}.mp4", storyboard.id),
            subtitle_url: format!("renders/{}.srt", storyboard.id),
            alt_voiceovers: VOICE_VARIANTS
                .iter()
                .map(|variant| format!("{} voice {}", audio.voice_style, variant))
                .collect(),
            duration: round2(storyboard.total_duration()),
        };

        VideoSynthesisResult { video, timeline }
    }
}
