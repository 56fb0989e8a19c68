//! Soil Reference Profiles
//!
//! Per-crop soil chemistry ranges, moisture floor and texture-specific
//! irrigation intervals for tropical crops.
//!
//! Note: crop names here do not line up with the task catalog (e.g. "Neem Tree"
//! vs "Neem", "Sweet Potato" vs "Purple Sweet Potato"). Lookups are exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlannerError;

/// Closed soil texture classification used to index irrigation guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Texture {
    Sandy,
    Loamy,
    Clay,
    Silty,
}

impl Texture {
    pub const ALL: [Texture; 4] = [Texture::Sandy, Texture::Loamy, Texture::Clay, Texture::Silty];

    pub fn display_text(&self) -> &'static str {
        match self {
            Texture::Sandy => "Sandy",
            Texture::Loamy => "Loamy",
            Texture::Clay => "Clay",
            Texture::Silty => "Silty",
        }
    }
}

impl fmt::Display for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

impl FromStr for Texture {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandy" => Ok(Texture::Sandy),
            "loamy" => Ok(Texture::Loamy),
            "clay" => Ok(Texture::Clay),
            "silty" => Ok(Texture::Silty),
            _ => Err(PlannerError::UnknownTexture(s.to_string())),
        }
    }
}

/// How often to irrigate on a given texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IrrigationInterval {
    /// Water every `min_days`-`max_days` days
    EveryDays { min_days: u32, max_days: u32 },
    /// Paddy-style crops kept under standing water
    Flooded,
}

impl IrrigationInterval {
    const fn days(min_days: u32, max_days: u32) -> Self {
        IrrigationInterval::EveryDays { min_days, max_days }
    }
}

impl fmt::Display for IrrigationInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrrigationInterval::EveryDays { min_days, max_days } if min_days == max_days => {
                write!(f, "{}d", min_days)
            }
            IrrigationInterval::EveryDays { min_days, max_days } => {
                write!(f, "{}-{}d", min_days, max_days)
            }
            IrrigationInterval::Flooded => f.write_str("Flooded"),
        }
    }
}

/// Irrigation interval for each of the four textures
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IrrigationByTexture {
    pub sandy: IrrigationInterval,
    pub loamy: IrrigationInterval,
    pub clay: IrrigationInterval,
    pub silty: IrrigationInterval,
}

impl IrrigationByTexture {
    pub fn get(&self, texture: Texture) -> IrrigationInterval {
        match texture {
            Texture::Sandy => self.sandy,
            Texture::Loamy => self.loamy,
            Texture::Clay => self.clay,
            Texture::Silty => self.silty,
        }
    }
}

/// Reference soil conditions for one crop
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SoilReferenceProfile {
    pub crop: &'static str,
    pub ph_min: f64,
    pub ph_max: f64,
    /// Organic matter range (%)
    pub organic_matter_min: f64,
    pub organic_matter_max: f64,
    /// Minimum soil moisture (%); there is no upper bound
    pub moisture_threshold_percent: u32,
    pub irrigation: IrrigationByTexture,
}

impl SoilReferenceProfile {
    pub fn irrigation_interval(&self, texture: Texture) -> IrrigationInterval {
        self.irrigation.get(texture)
    }
}

// ============================================================================
// EMBEDDED SOIL PROFILES
// ============================================================================

const fn profile(
    crop: &'static str,
    ph: (f64, f64),
    om: (f64, f64),
    moisture_threshold_percent: u32,
    irrigation: [IrrigationInterval; 4],
) -> SoilReferenceProfile {
    let [sandy, loamy, clay, silty] = irrigation;
    SoilReferenceProfile {
        crop,
        ph_min: ph.0,
        ph_max: ph.1,
        organic_matter_min: om.0,
        organic_matter_max: om.1,
        moisture_threshold_percent,
        irrigation: IrrigationByTexture { sandy, loamy, clay, silty },
    }
}

use IrrigationInterval::Flooded;

const fn d(min_days: u32, max_days: u32) -> IrrigationInterval {
    IrrigationInterval::days(min_days, max_days)
}

pub(crate) static SOIL_PROFILES: &[SoilReferenceProfile] = &[
    profile("Banana", (6.0, 7.5), (4.0, 6.0), 65, [d(2, 3), d(3, 5), d(5, 7), d(4, 6)]),
    profile("Tomato", (5.5, 7.0), (2.5, 4.0), 70, [d(2, 3), d(3, 4), d(4, 5), d(3, 4)]),
    profile("Papaya", (6.0, 7.0), (3.0, 5.0), 60, [d(4, 6), d(7, 7), d(7, 7), d(5, 7)]),
    profile("Moringa", (6.0, 7.5), (1.5, 3.0), 50, [d(7, 10), d(10, 14), d(14, 18), d(10, 12)]),
    profile("Pineapple", (4.0, 6.0), (2.0, 4.0), 55, [d(5, 7), d(7, 10), d(10, 14), d(7, 10)]),
    profile("Cassava", (5.0, 6.5), (1.5, 2.5), 60, [d(7, 7), d(10, 14), d(14, 18), d(12, 14)]),
    profile("Lemongrass", (6.0, 7.0), (2.0, 4.0), 50, [d(3, 5), d(5, 7), d(7, 10), d(5, 7)]),
    profile("Ginger", (5.5, 6.5), (3.0, 5.0), 70, [d(3, 4), d(4, 5), d(5, 7), d(4, 6)]),
    profile("Turmeric", (6.0, 7.0), (3.0, 5.0), 65, [d(4, 5), d(5, 6), d(6, 8), d(5, 7)]),
    profile("Sweet Potato", (5.5, 6.5), (2.0, 4.0), 60, [d(7, 10), d(10, 14), d(14, 18), d(10, 14)]),
    profile("Eggplant", (5.5, 6.8), (2.5, 4.0), 65, [d(2, 3), d(3, 5), d(5, 7), d(3, 5)]),
    profile("Chili Pepper", (5.5, 7.0), (2.0, 4.0), 60, [d(3, 4), d(4, 6), d(6, 8), d(4, 6)]),
    profile("Watermelon", (6.0, 7.0), (2.0, 4.0), 60, [d(3, 5), d(5, 7), d(7, 10), d(5, 7)]),
    profile("Cacao", (5.0, 7.5), (3.0, 6.0), 70, [d(7, 7), d(7, 10), d(10, 14), d(7, 10)]),
    profile("Coffee", (5.0, 6.5), (3.0, 5.0), 65, [d(5, 7), d(7, 10), d(10, 14), d(7, 10)]),
    profile("Rice", (5.5, 6.5), (2.0, 4.0), 80, [Flooded, Flooded, Flooded, Flooded]),
    profile("Sugarcane", (6.0, 7.0), (3.0, 6.0), 70, [d(4, 6), d(6, 8), d(8, 10), d(6, 8)]),
    profile("Neem Tree", (6.0, 8.0), (1.0, 3.0), 40, [d(14, 21), d(21, 30), d(30, 40), d(21, 28)]),
    profile("Soursop", (6.0, 7.0), (3.0, 5.0), 70, [d(4, 6), d(7, 10), d(10, 14), d(7, 10)]),
    profile("Groundnuts", (5.0, 6.5), (2.0, 4.0), 65, [d(4, 6), d(6, 8), d(8, 10), d(6, 8)]),
    profile("Taro", (5.5, 6.5), (3.0, 5.0), 75, [Flooded, Flooded, Flooded, Flooded]),
    profile("Yam", (5.5, 6.5), (2.5, 4.0), 70, [d(10, 14), d(14, 18), d(18, 21), d(14, 18)]),
];
