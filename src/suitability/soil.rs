use serde::{Deserialize, Serialize};

use crate::catalog::{lookup_soil_profile, IrrigationInterval, SoilReferenceProfile, Texture};
use crate::error::{ensure_finite, ensure_non_negative, Result};

pub const PH_ADVISORY: &str = "Use lime/ash to raise pH or sulfur-rich compost to lower it.";
pub const ORGANIC_MATTER_ADVISORY: &str =
    "Add compost/vermicompost/manure to boost organic matter.";
pub const MOISTURE_ADVISORY: &str =
    "Mulch (straw/leaves) to retain moisture and improve structure.";

/// Measured soil conditions for one field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilReading {
    pub ph: f64,
    pub organic_matter_pct: f64,
    pub moisture_pct: u32,
    pub texture: Texture,
}

/// Pass/fail flags and advice comparing a reading to a crop's reference profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityReport {
    pub crop: String,
    pub reading: SoilReading,
    /// Inclusive reference range
    pub ph_range: (f64, f64),
    pub organic_matter_range: (f64, f64),
    pub moisture_threshold_percent: u32,
    pub ph_ok: bool,
    pub organic_matter_ok: bool,
    pub moisture_ok: bool,
    pub irrigation_interval: IrrigationInterval,
    /// One entry per failing check, in pH / organic matter / moisture order
    pub advisories: Vec<String>,
}

impl SuitabilityReport {
    pub fn all_ok(&self) -> bool {
        self.ph_ok && self.organic_matter_ok && self.moisture_ok
    }
}

/// Outcome of a soil evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SoilEvaluation {
    Assessed(SuitabilityReport),
    /// The crop has no soil reference profile
    NoData { crop: String },
}

impl SoilEvaluation {
    pub fn report(&self) -> Option<&SuitabilityReport> {
        match self {
            SoilEvaluation::Assessed(report) => Some(report),
            SoilEvaluation::NoData { .. } => None,
        }
    }
}

/// Compare a reading against a reference profile
///
/// pH and organic matter pass inside their inclusive ranges; moisture only
/// has a floor.
pub fn assess(crop: &str, profile: &SoilReferenceProfile, reading: SoilReading) -> SuitabilityReport {
    let ph_ok = (profile.ph_min..=profile.ph_max).contains(&reading.ph);
    let organic_matter_ok = (profile.organic_matter_min..=profile.organic_matter_max)
        .contains(&reading.organic_matter_pct);
    let moisture_ok = reading.moisture_pct >= profile.moisture_threshold_percent;

    let advisories = [
        (ph_ok, PH_ADVISORY),
        (organic_matter_ok, ORGANIC_MATTER_ADVISORY),
        (moisture_ok, MOISTURE_ADVISORY),
    ]
    .into_iter()
    .filter(|(ok, _)| !ok)
    .map(|(_, advice)| advice.to_string())
    .collect();

    SuitabilityReport {
        crop: crop.to_string(),
        reading,
        ph_range: (profile.ph_min, profile.ph_max),
        organic_matter_range: (profile.organic_matter_min, profile.organic_matter_max),
        moisture_threshold_percent: profile.moisture_threshold_percent,
        ph_ok,
        organic_matter_ok,
        moisture_ok,
        irrigation_interval: profile.irrigation_interval(reading.texture),
        advisories,
    }
}

/// Evaluate measured soil conditions for a crop
///
/// Returns [`SoilEvaluation::NoData`] when the crop has no soil profile.
/// Non-finite pH or organic matter, and negative organic matter, are
/// rejected.
///
/// # Examples
/// ```
/// use farmops_planner::catalog::Texture;
/// use farmops_planner::suitability::evaluate_soil;
///
/// let eval = evaluate_soil("Banana", 6.5, 5.0, 70, Texture::Loamy).unwrap();
/// let report = eval.report().unwrap();
/// assert!(report.all_ok());
/// assert_eq!(report.irrigation_interval.to_string(), "3-5d");
/// ```
pub fn evaluate_soil(
    crop: &str,
    ph: f64,
    organic_matter_pct: f64,
    moisture_pct: u32,
    texture: Texture,
) -> Result<SoilEvaluation> {
    let ph = ensure_finite("ph", ph)?;
    let organic_matter_pct = ensure_non_negative("organic_matter_pct", organic_matter_pct)?;

    let Some(profile) = lookup_soil_profile(crop) else {
        tracing::debug!(crop, "no soil reference profile");
        return Ok(SoilEvaluation::NoData { crop: crop.to_string() });
    };

    let reading = SoilReading { ph, organic_matter_pct, moisture_pct, texture };
    Ok(SoilEvaluation::Assessed(assess(crop, profile, reading)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    fn report(crop: &str, ph: f64, om: f64, moisture: u32) -> SuitabilityReport {
        evaluate_soil(crop, ph, om, moisture, Texture::Loamy)
            .unwrap()
            .report()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_ph_bounds_inclusive() {
        // Banana: pH 6.0-7.5
        assert!(report("Banana", 6.0, 5.0, 70).ph_ok);
        assert!(report("Banana", 7.5, 5.0, 70).ph_ok);
        assert!(!report("Banana", 5.99, 5.0, 70).ph_ok);
        assert!(!report("Banana", 7.51, 5.0, 70).ph_ok);
    }

    #[test]
    fn test_moisture_is_floor_only() {
        // Banana threshold 65
        assert!(!report("Banana", 6.5, 5.0, 64).moisture_ok);
        assert!(report("Banana", 6.5, 5.0, 65).moisture_ok);
        assert!(report("Banana", 6.5, 5.0, 100).moisture_ok);
        assert!(report("Banana", 6.5, 5.0, u32::MAX).moisture_ok);
    }

    #[test]
    fn test_one_advisory_per_failing_check() {
        let r = report("Tomato", 8.0, 1.0, 10);
        assert!(!r.all_ok());
        assert_eq!(
            r.advisories,
            vec![PH_ADVISORY, ORGANIC_MATTER_ADVISORY, MOISTURE_ADVISORY]
        );

        let r = report("Tomato", 6.0, 1.0, 80);
        assert_eq!(r.advisories, vec![ORGANIC_MATTER_ADVISORY]);

        assert!(report("Tomato", 6.0, 3.0, 80).advisories.is_empty());
    }

    #[test]
    fn test_irrigation_interval_by_texture() {
        let eval = evaluate_soil("Rice", 6.0, 3.0, 90, Texture::Sandy).unwrap();
        assert_eq!(eval.report().unwrap().irrigation_interval, IrrigationInterval::Flooded);

        let eval = evaluate_soil("Cassava", 6.0, 2.0, 70, Texture::Clay).unwrap();
        assert_eq!(eval.report().unwrap().irrigation_interval.to_string(), "14-18d");
    }

    #[test]
    fn test_unknown_crop_is_no_data() {
        let eval = evaluate_soil("Durian", 6.0, 3.0, 60, Texture::Loamy).unwrap();
        assert_eq!(eval, SoilEvaluation::NoData { crop: "Durian".to_string() });
        assert!(eval.report().is_none());
    }

    #[test]
    fn test_non_finite_input_rejected() {
        assert!(matches!(
            evaluate_soil("Banana", f64::NAN, 5.0, 70, Texture::Loamy),
            Err(PlannerError::NonFinite { field: "ph", .. })
        ));
        assert!(matches!(
            evaluate_soil("Banana", 6.5, f64::INFINITY, 70, Texture::Loamy),
            Err(PlannerError::NonFinite { field: "organic_matter_pct", .. })
        ));
        // Checked before the catalog lookup
        assert!(evaluate_soil("Durian", f64::NAN, 5.0, 70, Texture::Loamy).is_err());
    }
}
