//! Crop Catalog
//!
//! Static, immutable reference data keyed by crop name:
//! - `tasks.rs` - field-operation templates (task label + day offset)
//! - `maturity.rs` - days to harvest for the single-date calendar
//! - `soil.rs` - soil reference profiles and irrigation intervals
//! - `economics.rs` - yield / cost / price per hectare
//! - `guidance.rs` - companions, planting windows, organic inputs
//! - `guidelines.rs` - GAP checklist and pest controls
//! - `climate_risk.rs` - climate hazards and resilience actions
//!
//! Each catalog was maintained independently, so their crop sets differ.
//! A crop missing from a catalog is an ordinary outcome: every lookup
//! returns `Option` and leaves the fallback policy to the caller.

pub mod tasks;
pub mod maturity;
pub mod soil;
pub mod economics;
pub mod guidance;
pub mod guidelines;
pub mod climate_risk;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub use tasks::{CropTaskTemplate, TaskStep};
pub use maturity::DEFAULT_MATURITY_DAYS;
pub use soil::{IrrigationByTexture, IrrigationInterval, SoilReferenceProfile, Texture};
pub use economics::EconomicProfile;
pub use guidance::{crop_guidance, CropGuidance, InputRate, SoilType};
pub use guidelines::{ManagementGuidelines, PestControl};
pub use climate_risk::{climate_resilience_plan, ResilienceRow};

/// Which catalog to list crops from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Tasks,
    Maturity,
    Soil,
    Economics,
    Guidelines,
}

/// Name-keyed indexes over the static tables, built once on first lookup
struct CatalogIndex {
    tasks: FxHashMap<&'static str, &'static CropTaskTemplate>,
    maturity: FxHashMap<&'static str, u32>,
    soil: FxHashMap<&'static str, &'static SoilReferenceProfile>,
    economics: FxHashMap<&'static str, EconomicProfile>,
    guidelines: FxHashMap<&'static str, &'static ManagementGuidelines>,
}

impl CatalogIndex {
    fn build() -> Self {
        let index = Self {
            tasks: tasks::CROP_TASKS.iter().map(|t| (t.crop, t)).collect(),
            maturity: maturity::CROP_MATURITY.iter().copied().collect(),
            soil: soil::SOIL_PROFILES.iter().map(|p| (p.crop, p)).collect(),
            economics: economics::CROP_ECONOMICS.iter().copied().collect(),
            guidelines: guidelines::MANAGEMENT_GUIDELINES
                .iter()
                .map(|g| (g.crop, g))
                .collect(),
        };

        tracing::debug!(
            tasks = index.tasks.len(),
            maturity = index.maturity.len(),
            soil = index.soil.len(),
            economics = index.economics.len(),
            guidelines = index.guidelines.len(),
            "built crop catalog indexes"
        );

        index
    }
}

fn index() -> &'static CatalogIndex {
    static INDEX: OnceLock<CatalogIndex> = OnceLock::new();
    INDEX.get_or_init(CatalogIndex::build)
}

/// Build the lookup indexes now instead of on the first lookup
pub fn warm_up() {
    index();
}

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Task template for a crop (exact, case-sensitive name match)
///
/// # Examples
/// ```
/// use farmops_planner::catalog::lookup_tasks;
///
/// let tomato = lookup_tasks("Tomato").unwrap();
/// assert_eq!(tomato.steps[1].label, "Transplanting");
/// assert_eq!(tomato.steps[1].offset_days, 21);
/// assert!(lookup_tasks("tomato").is_none());
/// ```
pub fn lookup_tasks(crop: &str) -> Option<&'static CropTaskTemplate> {
    index().tasks.get(crop).copied()
}

/// Days from planting to harvest
pub fn lookup_maturity(crop: &str) -> Option<u32> {
    index().maturity.get(crop).copied()
}

/// Soil reference profile
pub fn lookup_soil_profile(crop: &str) -> Option<&'static SoilReferenceProfile> {
    index().soil.get(crop).copied()
}

/// Per-hectare economics
pub fn lookup_economics(crop: &str) -> Option<EconomicProfile> {
    index().economics.get(crop).copied()
}

/// GAP checklist and pest controls
pub fn lookup_management_guidelines(crop: &str) -> Option<&'static ManagementGuidelines> {
    index().guidelines.get(crop).copied()
}

/// Crop names of one catalog, in declaration order
pub fn crop_names(kind: CatalogKind) -> Vec<&'static str> {
    match kind {
        CatalogKind::Tasks => tasks::CROP_TASKS.iter().map(|t| t.crop).collect(),
        CatalogKind::Maturity => maturity::CROP_MATURITY.iter().map(|(c, _)| *c).collect(),
        CatalogKind::Soil => soil::SOIL_PROFILES.iter().map(|p| p.crop).collect(),
        CatalogKind::Economics => economics::CROP_ECONOMICS.iter().map(|(c, _)| *c).collect(),
        CatalogKind::Guidelines => guidelines::MANAGEMENT_GUIDELINES
            .iter()
            .map(|g| g.crop)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact_match() {
        assert!(lookup_tasks("Cassava").is_some());
        assert!(lookup_tasks("cassava").is_none());
        assert!(lookup_tasks(" Cassava").is_none());
    }

    #[test]
    fn test_catalogs_do_not_fully_overlap() {
        // "Neem" has tasks but the soil catalog calls it "Neem Tree"
        assert!(lookup_tasks("Neem").is_some());
        assert!(lookup_soil_profile("Neem").is_none());
        assert!(lookup_soil_profile("Neem Tree").is_some());

        // Bell Pepper only exists in the maturity catalog
        assert_eq!(lookup_maturity("Bell Pepper"), Some(90));
        assert!(lookup_tasks("Bell Pepper").is_none());
        assert!(lookup_economics("Bell Pepper").is_none());
    }

    #[test]
    fn test_crop_names_match_index_sizes() {
        assert_eq!(crop_names(CatalogKind::Tasks).len(), 26);
        assert_eq!(crop_names(CatalogKind::Maturity).len(), 21);
        assert_eq!(crop_names(CatalogKind::Soil).len(), 22);
        assert_eq!(crop_names(CatalogKind::Economics).len(), 26);
        assert_eq!(crop_names(CatalogKind::Guidelines).len(), 26);
    }

    #[test]
    fn test_economics_lookup() {
        let banana = lookup_economics("Banana").unwrap();
        assert_eq!(banana, EconomicProfile::new(30.0, 4500.0, 300.0));
        assert!(lookup_economics("Durian").is_none());
    }
}
