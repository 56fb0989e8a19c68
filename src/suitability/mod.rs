//! Suitability & Advisory Evaluation
//!
//! Pure checks of field conditions against per-crop reference data:
//! - `soil.rs` - pH / organic matter / moisture against the soil catalog,
//!   plus the texture-specific irrigation interval
//! - `elevation.rs` - altitude rules for highland and lowland crops

pub mod soil;
pub mod elevation;

pub use soil::{
    assess, evaluate_soil, SoilEvaluation, SoilReading, SuitabilityReport, MOISTURE_ADVISORY,
    ORGANIC_MATTER_ADVISORY, PH_ADVISORY,
};
pub use elevation::{check_elevation, ElevationAssessment};
