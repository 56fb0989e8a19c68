use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result};

const COFFEE_MIN_ELEVATION_M: f64 = 800.0;
const RICE_MAX_ELEVATION_M: f64 = 500.0;

pub const COFFEE_LOWLAND_WARNING: &str =
    "Coffee prefers highland areas above 800m. Yield and quality may be low.";
pub const RICE_HIGHLAND_WARNING: &str =
    "Rice grows best in lowland areas. Consider upland rice varieties.";
pub const ELEVATION_ACCEPTABLE: &str =
    "Elevation is within acceptable range for the selected crop.";

/// Elevation check result for one crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationAssessment {
    pub crop: String,
    /// Meters above sea level
    pub elevation_m: f64,
    pub acceptable: bool,
    pub message: String,
}

/// Check a farm's elevation against the crop's known altitude preference
///
/// Only Coffee (highland, 800 m and up) and Rice (lowland, up to 500 m)
/// carry an elevation rule; every other crop is acceptable anywhere.
pub fn check_elevation(crop: &str, elevation_m: f64) -> Result<ElevationAssessment> {
    let elevation_m = ensure_finite("elevation_m", elevation_m)?;

    let warning = match crop {
        "Coffee" if elevation_m < COFFEE_MIN_ELEVATION_M => Some(COFFEE_LOWLAND_WARNING),
        "Rice" if elevation_m > RICE_MAX_ELEVATION_M => Some(RICE_HIGHLAND_WARNING),
        _ => None,
    };

    Ok(ElevationAssessment {
        crop: crop.to_string(),
        elevation_m,
        acceptable: warning.is_none(),
        message: warning.unwrap_or(ELEVATION_ACCEPTABLE).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coffee_needs_highland() {
        let low = check_elevation("Coffee", 799.0).unwrap();
        assert!(!low.acceptable);
        assert_eq!(low.message, COFFEE_LOWLAND_WARNING);
        assert!(check_elevation("Coffee", 800.0).unwrap().acceptable);
    }

    #[test]
    fn test_rice_needs_lowland() {
        assert!(check_elevation("Rice", 500.0).unwrap().acceptable);
        let high = check_elevation("Rice", 501.0).unwrap();
        assert!(!high.acceptable);
        assert_eq!(high.message, RICE_HIGHLAND_WARNING);
    }

    #[test]
    fn test_other_crops_always_acceptable() {
        for elevation in [0.0, 450.0, 2500.0] {
            let a = check_elevation("Cassava", elevation).unwrap();
            assert!(a.acceptable);
            assert_eq!(a.message, ELEVATION_ACCEPTABLE);
        }
        assert!(check_elevation("Cassava", f64::NAN).is_err());
    }
}
