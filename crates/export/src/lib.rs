//! AdMock Export Service
//!
//! Bundles the final project state into files:
//! - one machine-readable JSON document for the whole project aggregate
//! - one human-readable markdown document per storyboard

pub mod fs;
pub mod markdown;

pub use fs::FsExporter;

use std::path::PathBuf;

use admock_projects::{Project, Storyboard};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ExportError> for admock_common::Error {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Io(e) => admock_common::Error::Io(e),
            ExportError::Serialization(e) => admock_common::Error::Serialization(e),
        }
    }
}

/// Export contract
pub trait Exporter: Send + Sync {
    /// Write the project artifact first, then one document per storyboard in
    /// input order, returning the written locations in that order.
    ///
    /// Writes are not transactional: files written before a failure stay.
    fn bundle(
        &self,
        project: &Project,
        storyboards: &[&Storyboard],
    ) -> Result<Vec<PathBuf>, ExportError>;
}
