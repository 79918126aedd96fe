//! Local filesystem exporter

use std::fs;
use std::path::{Path, PathBuf};

use admock_projects::{Project, Storyboard};

use crate::markdown::render_storyboard;
use crate::{ExportError, Exporter};

/// Writes `{project_id}.json` and `{storyboard_id}.md` files under a base directory
#[derive(Debug, Clone)]
pub struct FsExporter {
    base_path: PathBuf,
}

impl FsExporter {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn export_project_json(&self, project: &Project) -> Result<PathBuf, ExportError> {
        let path = self.base_path.join(format!("{}.json", project.id));
        let body = serde_json::to_string_pretty(project)?;
        fs::write(&path, body)?;
        Ok(path)
    }

    pub fn export_storyboard_doc(&self, storyboard: &Storyboard) -> Result<PathBuf, ExportError> {
        let path = self.base_path.join(format!("{}.md", storyboard.id));
        fs::write(&path, render_storyboard(storyboard))?;
        Ok(path)
    }
}

impl Exporter for FsExporter {
    fn bundle(
        &self,
        project: &Project,
        storyboards: &[&Storyboard],
    ) -> Result<Vec<PathBuf>, ExportError> {
        fs::create_dir_all(&self.base_path)?;

        let mut paths = Vec::with_capacity(storyboards.len() + 1);
        paths.push(self.export_project_json(project)?);
        for storyboard in storyboards {
            paths.push(self.export_storyboard_doc(storyboard)?);
        }

        tracing::info!(
            project_id = %project.id,
            base_path = %self.base_path.display(),
            artifacts = paths.len(),
            "Exported project bundle"
        );
        Ok(paths)
    }
}
