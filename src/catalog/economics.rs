//! Crop Economics
//!
//! Sample per-hectare yield, production cost and farm-gate price per crop.
//! Values are starting points: callers override them per calculation without
//! touching the catalog.

use serde::{Deserialize, Serialize};

/// Per-hectare economics for one crop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicProfile {
    /// Projected yield (t/ha)
    pub yield_tons_per_ha: f64,
    /// Production cost (USD/ha)
    pub cost_per_ha: f64,
    /// Price (USD/t)
    pub price_per_ton: f64,
}

impl EconomicProfile {
    /// Starting values offered when a crop has no catalog entry
    pub const DEFAULT: EconomicProfile = EconomicProfile::new(20.0, 3000.0, 300.0);

    pub const fn new(yield_tons_per_ha: f64, cost_per_ha: f64, price_per_ton: f64) -> Self {
        Self { yield_tons_per_ha, cost_per_ha, price_per_ton }
    }

    /// Replace any subset of the values with user-entered ones
    pub fn with_overrides(
        self,
        yield_tons_per_ha: Option<f64>,
        cost_per_ha: Option<f64>,
        price_per_ton: Option<f64>,
    ) -> Self {
        Self {
            yield_tons_per_ha: yield_tons_per_ha.unwrap_or(self.yield_tons_per_ha),
            cost_per_ha: cost_per_ha.unwrap_or(self.cost_per_ha),
            price_per_ton: price_per_ton.unwrap_or(self.price_per_ton),
        }
    }
}

pub(crate) static CROP_ECONOMICS: &[(&str, EconomicProfile)] = &[
    ("Banana", EconomicProfile::new(30.0, 4500.0, 300.0)),
    ("Aloe Vera", EconomicProfile::new(25.0, 3000.0, 350.0)),
    ("Papaya", EconomicProfile::new(35.0, 3200.0, 280.0)),
    ("Neem Tree", EconomicProfile::new(10.0, 1800.0, 200.0)),
    ("Ashwagandha", EconomicProfile::new(15.0, 2200.0, 500.0)),
    ("Guava", EconomicProfile::new(28.0, 4000.0, 320.0)),
    ("Jackfruit", EconomicProfile::new(20.0, 3700.0, 450.0)),
    ("Moringa", EconomicProfile::new(18.0, 2000.0, 250.0)),
    ("Soursop", EconomicProfile::new(22.0, 3400.0, 400.0)),
    ("Turmeric", EconomicProfile::new(16.0, 2900.0, 600.0)),
    ("Cassava", EconomicProfile::new(28.0, 3100.0, 200.0)),
    ("Pineapple", EconomicProfile::new(32.0, 3600.0, 300.0)),
    ("Ginger", EconomicProfile::new(20.0, 3300.0, 550.0)),
    ("Sugarcane", EconomicProfile::new(80.0, 5200.0, 100.0)),
    ("Taro", EconomicProfile::new(24.0, 2700.0, 220.0)),
    ("Breadfruit", EconomicProfile::new(18.0, 3900.0, 340.0)),
    ("Coconut", EconomicProfile::new(12.0, 4800.0, 500.0)),
    ("Peanut", EconomicProfile::new(22.0, 3100.0, 350.0)),
    ("Yam", EconomicProfile::new(26.0, 3300.0, 280.0)),
    ("Bitter Gourd", EconomicProfile::new(20.0, 2600.0, 300.0)),
    ("Sweet Potato", EconomicProfile::new(30.0, 2800.0, 250.0)),
    ("Lemongrass", EconomicProfile::new(15.0, 2100.0, 300.0)),
    ("Arrowroot", EconomicProfile::new(18.0, 2900.0, 400.0)),
    ("Roselle", EconomicProfile::new(14.0, 2300.0, 450.0)),
    ("Chili Pepper", EconomicProfile::new(20.0, 2700.0, 350.0)),
    ("Tomato", EconomicProfile::new(25.0, 3000.0, 320.0)),
];
