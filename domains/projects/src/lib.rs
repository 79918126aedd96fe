//! Projects domain: briefs, brand tokens, storyboards and their versions, video outputs

pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    AudioProfile, AuditEvent, AuditEventKind, BrandLogo, BrandTokens, BrandVoice, Brief, Frame,
    Project, Storyboard, StoryboardStyle, StoryboardVersion, VideoOutput,
};
pub use domain::state::{StateError, VersionEvent, VersionState, VersionStateMachine};
pub use domain::version::VersionLabel;
