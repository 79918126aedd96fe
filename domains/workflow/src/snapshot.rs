//! Read-only view of the latest artifacts in a workflow

use admock_projects::{BrandTokens, Project, Storyboard, StoryboardStyle, VideoOutput};

/// Latest artifact of each stage, borrowed from the project
#[derive(Debug, Clone, Copy)]
pub struct WorkflowSnapshot<'a> {
    pub brand_tokens: Option<&'a BrandTokens>,
    pub storyboard: Option<&'a Storyboard>,
    pub hifi_storyboard: Option<&'a Storyboard>,
    pub video: Option<&'a VideoOutput>,
}

impl<'a> WorkflowSnapshot<'a> {
    pub fn of(project: &'a Project) -> Self {
        let current = |style: StoryboardStyle| -> Option<&'a Storyboard> {
            project
                .current_version(style)
                .ok()
                .map(|version| &version.storyboard)
        };

        Self {
            brand_tokens: project.brand_tokens.as_ref(),
            storyboard: current(StoryboardStyle::Pencil),
            hifi_storyboard: current(StoryboardStyle::Hifi),
            video: project.video_outputs.last(),
        }
    }
}
