//! Stage collaborators wired into a workflow

use admock_brand::{BrandExtractor, HeuristicBrandExtractor};
use admock_common::Config;
use admock_export::{Exporter, FsExporter};
use admock_storyboard::{
    BeatStoryboardGenerator, BrandedHifiRenderer, HifiRenderer, StoryboardGenerator,
};
use admock_video::{StitchingVideoSynthesizer, VideoSynthesizer};

/// The external collaborators a workflow calls into
pub struct StudioServices {
    pub brand_extractor: Box<dyn BrandExtractor>,
    pub storyboard_generator: Box<dyn StoryboardGenerator>,
    pub hifi_renderer: Box<dyn HifiRenderer>,
    pub video_synthesizer: Box<dyn VideoSynthesizer>,
    pub exporter: Box<dyn Exporter>,
}

impl StudioServices {
    /// Deterministic collaborators configured from `config`
    pub fn from_config(config: &Config) -> Self {
        tracing::debug!(
            export_dir = %config.export_dir.display(),
            hifi_max_words = config.hifi_max_words,
            "Wiring studio services"
        );

        Self {
            brand_extractor: Box::new(HeuristicBrandExtractor::new()),
            storyboard_generator: Box::new(BeatStoryboardGenerator::new()),
            hifi_renderer: Box::new(BrandedHifiRenderer::new(config.hifi_max_words)),
            video_synthesizer: Box::new(StitchingVideoSynthesizer::new()),
            exporter: Box::new(FsExporter::new(config.export_dir.clone())),
        }
    }

    pub fn with_exporter(mut self, exporter: Box<dyn Exporter>) -> Self {
        self.exporter = exporter;
        self
    }
}

impl std::fmt::Debug for StudioServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioServices").finish_non_exhaustive()
    }
}
