//! Crop Management Guidelines
//!
//! Good Agricultural Practices (GAP) and organic pest/disease controls per
//! crop. Most crops share the generic practice text and the generic
//! aphid / leaf-spot controls.

use serde::Serialize;

/// Organic control for one pest or disease
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PestControl {
    pub pest: &'static str,
    /// "N/A" when no symptom description is recorded
    pub symptoms: &'static str,
    pub control: &'static str,
}

/// GAP checklist and pest controls for one crop
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ManagementGuidelines {
    pub crop: &'static str,
    pub practices: &'static [&'static str],
    pub pests: &'static [PestControl],
}

const fn pest(pest: &'static str, control: &'static str) -> PestControl {
    PestControl { pest, symptoms: "N/A", control }
}

const GENERIC_GAP: &[&str] = &[
    "Use certified organic seed/planting material, maintain proper spacing, apply composted manure, rotate crops annually, and scout weekly.",
];

const GENERIC_PESTS: &[PestControl] = &[
    pest("Aphids", "Neem oil + soap spray"),
    pest("Fungal leaf spot", "Spray baking soda + water weekly"),
];

const fn generic(crop: &'static str) -> ManagementGuidelines {
    ManagementGuidelines { crop, practices: GENERIC_GAP, pests: GENERIC_PESTS }
}

pub(crate) static MANAGEMENT_GUIDELINES: &[ManagementGuidelines] = &[
    ManagementGuidelines {
        crop: "Turmeric",
        practices: &[
            "Use disease-free rhizomes, apply crop rotation with legumes, maintain 30 cm spacing, and mulch to conserve moisture and suppress weeds.",
        ],
        pests: &[
            PestControl {
                pest: "Shoot borer",
                symptoms: "Shoot borer",
                control: "Spray neem oil 0.5% every 10 days",
            },
            pest("Rhizome rot", "Use Trichoderma harzianum powder in soil at planting"),
        ],
    },
    ManagementGuidelines {
        crop: "Ginger",
        practices: &[
            "Use raised beds, organic mulch, disease-free seed rhizomes, and follow 2–3 year rotation",
            "Apply neem cake and biocontrol agents regularly.",
        ],
        pests: &[
            PestControl {
                pest: "Shoot borer",
                symptoms: "Shoot borer",
                control: "Apply neem seed kernel extract 5% at 15-day interval",
            },
            pest("Soft rot", "Apply Trichoderma viride and avoid water stagnation"),
        ],
    },
    ManagementGuidelines {
        crop: "Lemongrass",
        practices: GENERIC_GAP,
        pests: &[
            pest("Leaf blight", "Apply garlic oil spray weekly"),
            pest("Rust", "Use compost tea and neem extract"),
        ],
    },
    ManagementGuidelines {
        crop: "Moringa",
        practices: &[
            "Plant on raised beds, prune regularly to encourage branching, interplant with legumes, and use compost during flowering.",
        ],
        pests: &[
            pest("Aphids", "Spray neem oil or soapy water"),
            pest("Caterpillars", "Use Bacillus thuringiensis (Bt)"),
        ],
    },
    generic("Aloe Vera"),
    generic("Ashwagandha"),
    generic("Neem"),
    generic("Hibiscus"),
    generic("Butterfly Pea"),
    generic("Soursop"),
    ManagementGuidelines {
        crop: "Banana",
        practices: &[
            "Select healthy suckers, use banana circles with compost pits, manage irrigation, interplant with legumes, and remove old infected leaves.",
        ],
        pests: GENERIC_PESTS,
    },
    ManagementGuidelines {
        crop: "Papaya",
        practices: GENERIC_GAP,
        pests: &[
            PestControl {
                pest: "Damping off",
                symptoms: "Damping off",
                control: "Seed treatment with Trichoderma + compost",
            },
            pest("Papaya mealybug", "Apply neem oil and release parasitoid wasps"),
        ],
    },
    generic("Dragon Fruit"),
    generic("Watermelon"),
    generic("Purple Sweet Potato"),
    generic("Cassava"),
    generic("Yellow Malanga"),
    generic("Groundnuts"),
    generic("Bitter Gourd"),
    ManagementGuidelines {
        crop: "Tomato",
        practices: &[
            "Use resistant varieties, rotate with non-solanaceous crops, install drip irrigation, apply compost + neem cake, and prune lower leaves.",
        ],
        pests: &[
            pest("Leaf miner", "Neem oil and sticky traps"),
            pest("Blight", "Garlic+ginger+onion extract foliar spray"),
        ],
    },
    ManagementGuidelines {
        crop: "Eggplant",
        practices: GENERIC_GAP,
        pests: &[
            pest("Damping off", "Soil drench with neem and Trichoderma"),
            pest("Fruit and shoot borer", "Use pheromone traps + neem oil"),
        ],
    },
    ManagementGuidelines {
        crop: "Rice",
        practices: &[
            "Adopt SRI (System of Rice Intensification), maintain shallow water, transplant young seedlings, and use compost + azolla green manure.",
        ],
        pests: &[
            pest("Stem borer", "Use pheromone traps and neem leaf extract"),
            pest("Brown spot", "Apply cow dung ash or potash foliar spray"),
        ],
    },
    ManagementGuidelines {
        crop: "Corn",
        practices: GENERIC_GAP,
        pests: &[
            pest("Armyworm", "Spray neem seed extract 3%"),
            pest("Corn borer", "Release Trichogramma egg parasitoids"),
        ],
    },
    generic("Sugarcane"),
    generic("Coffee"),
    generic("Cacao"),
];
