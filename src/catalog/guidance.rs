//! Agronomic Guidance Tables
//!
//! Companion crops, best planting windows, organic input suggestions and
//! soil-type fertilizer tips for the decision-support view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlannerError;

/// Soil type as picked in the decision-support view
///
/// Distinct from [`super::soil::Texture`]: the decision-support view offers
/// "Clayey" where the soil monitor offers "Clay".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Loamy,
    Sandy,
    Clayey,
    Silty,
}

impl SoilType {
    pub fn display_text(&self) -> &'static str {
        match self {
            SoilType::Loamy => "Loamy",
            SoilType::Sandy => "Sandy",
            SoilType::Clayey => "Clayey",
            SoilType::Silty => "Silty",
        }
    }

    /// Organic fertilizer mix suited to this soil type
    pub fn fertilizer_tip(&self) -> &'static str {
        match self {
            SoilType::Loamy => "Compost + Vermicast",
            SoilType::Sandy => "Chicken manure + Biochar",
            SoilType::Clayey => "Decomposed FYM + Lime",
            SoilType::Silty => "Compost + Seaweed extract",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

impl FromStr for SoilType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loamy" => Ok(SoilType::Loamy),
            "sandy" => Ok(SoilType::Sandy),
            "clayey" => Ok(SoilType::Clayey),
            "silty" => Ok(SoilType::Silty),
            _ => Err(PlannerError::UnknownSoilType(s.to_string())),
        }
    }
}

/// Shown when a crop has no companion entry
pub const NO_KNOWN_COMPANIONS: &str = "No known companion crops.";

/// Shown when a crop has no organic input entry
pub const GENERIC_ORGANIC_INPUTS: &str =
    "Use compost, FPJ, vermicast, and neem-based biocontrol agents.";

/// Root crops that struggle in clayey soil
const CLAY_SENSITIVE_CROPS: &[&str] = &["Cassava", "Tomato", "Eggplant"];

pub(crate) static COMPANIONS: &[(&str, &[&str])] = &[
    ("Tomato", &["Basil", "Carrot"]),
    ("Cassava", &["Lemongrass", "Groundnuts"]),
    ("Moringa", &["Sweet Potato", "Legumes"]),
    ("Ginger", &["Turmeric", "Chili Pepper"]),
    ("Turmeric", &["Ginger", "Lemongrass"]),
    ("Eggplant", &["Beans", "Basil"]),
    ("Watermelon", &["Corn", "Radish"]),
];

pub(crate) static BEST_PLANTING_MONTHS: &[(&str, &str)] = &[
    ("Turmeric", "May–June"),
    ("Cassava", "March–May"),
    ("Moringa", "June–July"),
    ("Ginger", "April–June"),
    ("Hibiscus", "July–August"),
    ("Aloe Vera", "Anytime"),
    ("Bitter Gourd", "June–July"),
    ("Watermelon", "April–May"),
];

pub(crate) static PLANTING_RECOMMENDATIONS: &[(&str, &str)] = &[
    ("Turmeric", "Best in July. Companion: Ginger. Avoid Cassava."),
    ("Moringa", "Best in June–August. Companion: Lemongrass. Avoid Annatto."),
    ("Aloe Vera", "Best in June–September. Companion: Neem. Avoid Soursop."),
    ("Cassava", "Best in May–July. Companion: Groundnuts. Avoid Turmeric."),
    ("Hibiscus", "Best in July–August. Companion: Butterfly Pea."),
    ("Neem", "Best in Rainy Season. Companion: Aloe Vera. Avoid Watermelon."),
    ("Groundnuts", "Best in May–August. Companion: Cassava."),
    ("Watermelon", "Best in April–July. Avoid Neem nearby."),
];

pub(crate) static ORGANIC_INPUTS: &[(&str, &str)] = &[
    ("Turmeric", "Apply compost + Trichoderma + fermented ginger extract; avoid water-logging."),
    ("Ginger", "Use compost, FPJ (fermented plant juice), and ash tea for pest deterrence."),
    ("Lemongrass", "Apply compost + neem cake; spacing improves aroma oil production."),
    ("Moringa", "Use vermicast + IMO (Indigenous Microorganisms) and foliar seaweed extract."),
    ("Aloe Vera", "Apply compost + ash + EM-1; best with minimal moisture."),
    ("Ashwagandha", "Use compost + turmeric leaf mulch + neem leaf extract for pests."),
    ("Neem", "No external inputs needed; thrives in marginal land. Add compost if desired."),
    ("Hibiscus", "Use compost + vermitea; supports flowering and deep red calyces."),
    ("Butterfly Pea", "Add compost + ash solution spray; drought-tolerant legume."),
    ("Soursop", "Apply compost + Trichoderma + fruit peel FPJ; control mealybugs organically."),
    ("Banana", "Use compost + chopped pseudo-stem mulch + potassium foliar (banana ash tea)."),
    ("Papaya", "Apply FAA (fish amino acid) + EM-1 + compost; control root rot with Trichoderma."),
    ("Dragon Fruit", "Use vermicast + banana peel FPJ + Trichoderma soil drench."),
    ("Watermelon", "Apply compost + seaweed foliar + rice hull ash before flowering."),
    ("Purple Sweet Potato", "Use compost + biochar + IMO; mulch with rice straw."),
    ("Cassava", "Add compost + wood ash; avoid over-irrigation during tuber bulking."),
    ("Yellow Malanga", "Use compost + leaf litter mulch; EM-1 helps reduce root rot."),
    ("Groundnuts", "Use compost + Rhizobium inoculant + molasses; rotate with maize."),
    ("Bitter Gourd", "Apply compost + neem oil spray + Trichoderma soil application."),
    ("Tomato", "Use compost + vermicast + basil interplanting; neem foliar to prevent fruit borer."),
    ("Eggplant", "Apply compost + ash foliar + marigold border to deter pests."),
    ("Rice", "Use Azolla + compost + Trichoderma + fermented coconut water."),
    ("Corn", "Apply compost + FFJ (fermented fruit juice) + charcoal-dust banding."),
    ("Sugarcane", "Use press mud + Trichoderma + sugarcane sett treatment with cow urine."),
    ("Coffee", "Use compost + banana mulch + calcium from crushed eggshells + IMO."),
    ("Cacao", "Apply compost + Gliricidia mulch + Trichoderma drench + neem foliar."),
];

/// Fertilizer product and application rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputRate {
    pub fertilizer: &'static str,
    pub rate: &'static str,
}

const GENERIC_INPUT_RATE: InputRate = InputRate {
    fertilizer: "Fermented Plant Juice (FPJ) + Bokashi",
    rate: "3-5 tons/ha",
};

pub(crate) static INPUT_RATES: &[(&str, InputRate)] = &[
    ("Turmeric", InputRate { fertilizer: "Vermicompost + Indigenous Microorganisms (IMO)", rate: "5 tons/ha" }),
    ("Moringa", InputRate { fertilizer: "Decomposed Animal Manure + Seaweed Extract", rate: "4 tons/ha" }),
    ("Cassava", InputRate { fertilizer: "Composted Poultry Manure + Biochar", rate: "6 tons/ha" }),
    ("Aloe Vera", InputRate { fertilizer: "Cocopeat + Vermicast", rate: "4 tons/ha" }),
    ("Neem", InputRate { fertilizer: "Neem Cake + Trichoderma-enriched compost", rate: "3 tons/ha" }),
];

fn find<T: Copy>(table: &[(&str, T)], crop: &str) -> Option<T> {
    table.iter().find(|(name, _)| *name == crop).map(|(_, v)| *v)
}

/// Companion crops, or `None` when the crop has no entry
pub fn companions(crop: &str) -> Option<&'static [&'static str]> {
    find(COMPANIONS, crop)
}

/// Best planting window, e.g. "May–June"
pub fn best_planting_months(crop: &str) -> Option<&'static str> {
    find(BEST_PLANTING_MONTHS, crop)
}

/// Short planting recommendation (timing, companion, what to avoid)
pub fn planting_recommendation(crop: &str) -> Option<&'static str> {
    find(PLANTING_RECOMMENDATIONS, crop)
}

/// Organic input suggestion, falling back to a generic mix
pub fn organic_inputs(crop: &str) -> &'static str {
    find(ORGANIC_INPUTS, crop).unwrap_or(GENERIC_ORGANIC_INPUTS)
}

/// Fertilizer product and rate, falling back to FPJ + Bokashi
pub fn input_rate(crop: &str) -> InputRate {
    find(INPUT_RATES, crop).unwrap_or(GENERIC_INPUT_RATE)
}

/// Warning for crops known to root poorly in clayey soil
pub fn soil_mismatch_warning(crop: &str, soil: SoilType) -> Option<&'static str> {
    if soil == SoilType::Clayey && CLAY_SENSITIVE_CROPS.contains(&crop) {
        Some("Clayey soil may cause poor root development for this crop.")
    } else {
        None
    }
}

/// Everything the decision-support view shows for a crop on a soil type
#[derive(Debug, Clone, Serialize)]
pub struct CropGuidance {
    pub crop: String,
    pub companions: Vec<&'static str>,
    pub best_planting_months: Option<&'static str>,
    pub recommendation: Option<&'static str>,
    pub organic_inputs: &'static str,
    pub input_rate: InputRate,
    pub fertilizer_tip: Option<&'static str>,
    pub soil_warning: Option<&'static str>,
}

/// Assemble guidance for a crop; soil-specific fields are filled only when a soil type is given
pub fn crop_guidance(crop: &str, soil: Option<SoilType>) -> CropGuidance {
    CropGuidance {
        crop: crop.to_string(),
        companions: companions(crop)
            .map(|c| c.to_vec())
            .unwrap_or_else(|| vec![NO_KNOWN_COMPANIONS]),
        best_planting_months: best_planting_months(crop),
        recommendation: planting_recommendation(crop),
        organic_inputs: organic_inputs(crop),
        input_rate: input_rate(crop),
        fertilizer_tip: soil.map(|s| s.fertilizer_tip()),
        soil_warning: soil.and_then(|s| soil_mismatch_warning(crop, s)),
    }
}
