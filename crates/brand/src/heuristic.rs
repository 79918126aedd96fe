//! Heuristic Brand Extractor
//!
//! Infers palette, typography and voice from keywords in the website url
//! instead of crawling it, so results are deterministic and test-friendly.

use std::collections::BTreeMap;

use admock_projects::{BrandLogo, BrandTokens, BrandVoice};

use crate::{BrandExtractionResult, BrandExtractor};

const DEFAULT_COLORS: [(&str, &str); 3] = [
    ("primary", "#0A84FF"),
    ("secondary", "#111111"),
    ("accent", "#FFCC00"),
];
const ECO_COLORS: [(&str, &str); 3] = [
    ("primary", "#2E7D32"),
    ("secondary", "#1B5E20"),
    ("accent", "#A5D6A7"),
];
const LUXURY_COLORS: [(&str, &str); 3] = [
    ("primary", "#1A1A1A"),
    ("secondary", "#E5C07B"),
    ("accent", "#61AFEF"),
];

const DEFAULT_TYPOGRAPHY: [(&str, &str); 2] = [("heading", "Inter Bold"), ("body", "Inter Regular")];
const ECO_TYPOGRAPHY: [(&str, &str); 2] = [
    ("heading", "Work Sans SemiBold"),
    ("body", "Work Sans Regular"),
];
const LUXURY_TYPOGRAPHY: [(&str, &str); 2] = [
    ("heading", "Playfair Display Bold"),
    ("body", "Source Sans Pro"),
];

/// Which keyword family a url falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrandFamily {
    Eco,
    Luxury,
    Default,
}

impl BrandFamily {
    fn detect(url: &str) -> Self {
        if url.contains("eco") {
            BrandFamily::Eco
        } else if url.contains("lux") || url.contains("premium") {
            BrandFamily::Luxury
        } else {
            BrandFamily::Default
        }
    }
}

/// Offline brand extractor driven by url keywords
#[derive(Debug, Clone, Default)]
pub struct HeuristicBrandExtractor;

impl HeuristicBrandExtractor {
    pub fn new() -> Self {
        Self
    }

    fn palette(family: BrandFamily) -> BTreeMap<String, String> {
        let entries: &[(&str, &str)] = match family {
            BrandFamily::Eco => &ECO_COLORS,
            BrandFamily::Luxury => &LUXURY_COLORS,
            BrandFamily::Default => &DEFAULT_COLORS,
        };
        to_map(entries)
    }

    fn typography(family: BrandFamily) -> BTreeMap<String, String> {
        let entries: &[(&str, &str)] = match family {
            BrandFamily::Eco => &ECO_TYPOGRAPHY,
            BrandFamily::Luxury => &LUXURY_TYPOGRAPHY,
            BrandFamily::Default => &DEFAULT_TYPOGRAPHY,
        };
        to_map(entries)
    }
}

fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

impl BrandExtractor for HeuristicBrandExtractor {
    fn extract(&self, brand: &str, url: &str) -> BrandExtractionResult {
        let family = BrandFamily::detect(url);
        tracing::debug!(brand, url, ?family, "Heuristic brand extraction");

        let tone = if url.contains("play") {
            "confident, playful"
        } else {
            "modern, helpful"
        };

        let tokens = BrandTokens {
            brand: brand.to_string(),
            url: url.to_string(),
            colors: Self::palette(family),
            typography: Self::typography(family),
            logo: BrandLogo {
                url: format!("{}/assets/logo.svg", url.trim_end_matches('/')),
                safe_area: "10%".to_string(),
            },
            voice: BrandVoice {
                tone: tone.to_string(),
                donts: vec!["no sarcasm".to_string(), "no slang".to_string()],
            },
        };

        // Palette and typography share the same keyword families, so a default
        // family means neither was detected.
        let mut warnings = Vec::new();
        if family == BrandFamily::Default {
            warnings.push("Using default palette; no colours detected".to_string());
            warnings.push("Using default typography; no fonts detected".to_string());
        }

        BrandExtractionResult { tokens, warnings }
    }
}
