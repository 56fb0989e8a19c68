//! Climate Risk & Resilience
//!
//! Fixed climate hazards and the organic resilience action for each. The
//! table is crop-independent; the plan simply stamps country and crop onto
//! every row.

use serde::Serialize;

pub(crate) static CLIMATE_RISKS: &[(&str, &str)] = &[
    ("High Temperature", "Use heat-tolerant varieties and increase shading."),
    ("Heavy Rain", "Improve drainage and use raised beds."),
    ("Drought", "Implement drip irrigation and mulching."),
    ("Strong Winds", "Use windbreaks and plant support systems."),
    ("Flooding", "Elevated planting beds and rapid drainage systems."),
    ("Humidity Stress", "Increase plant spacing and improve air circulation."),
];

/// One row of the resilience plan
#[derive(Debug, Clone, Serialize)]
pub struct ResilienceRow {
    pub country: String,
    pub crop: String,
    pub climate_risk: &'static str,
    pub risk_threshold: &'static str,
    pub resilience_action: &'static str,
}

/// Climate risks and organic resilience strategies for a crop in a country
pub fn climate_resilience_plan(country: &str, crop: &str) -> Vec<ResilienceRow> {
    CLIMATE_RISKS
        .iter()
        .map(|(risk, action)| ResilienceRow {
            country: country.to_string(),
            crop: crop.to_string(),
            climate_risk: risk,
            risk_threshold: "High",
            resilience_action: action,
        })
        .collect()
}
