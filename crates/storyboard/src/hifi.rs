//! Brand-aware hi-fi storyboard renderer
//!
//! Produces a wholly new storyboard from a pencil one: every frame gets a
//! branded render path, on-screen text is held to a word budget, and frames
//! without music fall back to the brand theme.

use admock_common::config::DEFAULT_HIFI_MAX_WORDS;
use admock_projects::{BrandTokens, Frame, Storyboard, StoryboardStyle};

use crate::HifiRenderer;

/// Music cue applied to frames that have none
pub const BRAND_THEME_CUE: &str = "brand_theme";

/// Hi-fi renderer that applies brand text guidelines
#[derive(Debug, Clone)]
pub struct BrandedHifiRenderer {
    max_words: usize,
}

impl Default for BrandedHifiRenderer {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_HIFI_MAX_WORDS,
        }
    }
}

impl BrandedHifiRenderer {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    fn apply_text_guidelines(&self, text: &str, brand_tokens: &BrandTokens) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() <= self.max_words {
            return text.to_string();
        }
        format!(
            "{}… (trimmed to match {} guidelines)",
            words[..self.max_words].join(" "),
            brand_tokens.brand
        )
    }

    fn render_frame(&self, frame: &Frame, brand_tokens: &BrandTokens) -> Frame {
        let music_cue = match frame.music_cue.as_deref() {
            Some(cue) if !cue.is_empty() => cue.to_string(),
            _ => BRAND_THEME_CUE.to_string(),
        };

        Frame {
            on_screen_text: self.apply_text_guidelines(&frame.on_screen_text, brand_tokens),
            hifi_asset: Some(format!(
                "assets/hifi/{}_{}.png",
                frame.id, brand_tokens.brand
            )),
            music_cue: Some(music_cue),
            ..frame.clone()
        }
    }
}

impl HifiRenderer for BrandedHifiRenderer {
    fn render(&self, pencil: &Storyboard, brand_tokens: &BrandTokens) -> Storyboard {
        tracing::debug!(
            storyboard_id = %pencil.id,
            brand = %brand_tokens.brand,
            frames = pencil.frames.len(),
            "Rendering hi-fi storyboard"
        );

        Storyboard {
            id: format!("{}-hifi", pencil.id),
            style: StoryboardStyle::Hifi,
            frames: pencil
                .frames
                .iter()
                .map(|frame| self.render_frame(frame, brand_tokens))
                .collect(),
            narrative: pencil.narrative.clone(),
            risks: pencil.risks.clone(),
            alt_hooks: pencil.alt_hooks.clone(),
        }
    }
}
