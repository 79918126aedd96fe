//! Workflow domain: the four-stage ad production orchestrator
//!
//! Brand grounding → storyboard concept → hi-fi storyboard → video, then export.

pub mod orchestrator;
pub mod services;
pub mod snapshot;

pub use orchestrator::Workflow;
pub use services::StudioServices;
pub use snapshot::WorkflowSnapshot;
