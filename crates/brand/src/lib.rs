//! AdMock Brand Service
//!
//! Turns a brand name and website into design tokens:
//! - `BrandExtractor`: the contract the workflow consumes
//! - `HeuristicBrandExtractor`: deterministic, offline implementation

pub mod heuristic;

pub use heuristic::HeuristicBrandExtractor;

use admock_projects::BrandTokens;
use serde::{Deserialize, Serialize};

/// Tokens extracted for a brand plus anything the extractor had to guess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandExtractionResult {
    pub tokens: BrandTokens,
    pub warnings: Vec<String>,
}

/// Brand grounding contract. Implementations are pure functions of their inputs.
pub trait BrandExtractor: Send + Sync {
    fn extract(&self, brand: &str, url: &str) -> BrandExtractionResult;
}
