//! Crop Task Templates
//!
//! Per-crop field-operation templates: an ordered list of (task label,
//! days after planting) pairs. Offsets are listed in declaration order and
//! are not required to be sorted; the schedule generator sorts by date.

use serde::Serialize;

/// One task in a crop template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStep {
    pub label: &'static str,
    /// Days after the anchor (planting) date
    pub offset_days: u32,
}

impl TaskStep {
    pub const fn new(label: &'static str, offset_days: u32) -> Self {
        Self { label, offset_days }
    }
}

/// Ordered task template for a single crop
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CropTaskTemplate {
    pub crop: &'static str,
    pub steps: &'static [TaskStep],
}

impl CropTaskTemplate {
    /// Largest offset in the template (the last field operation)
    pub fn span_days(&self) -> u32 {
        self.steps.iter().map(|s| s.offset_days).max().unwrap_or(0)
    }
}

// ============================================================================
// EMBEDDED TASK TEMPLATES (26 crops)
// ============================================================================

pub(crate) static CROP_TASKS: &[CropTaskTemplate] = &[
    CropTaskTemplate {
        crop: "Turmeric",
        steps: &[
            TaskStep::new("Land Preparation", 0),
            TaskStep::new("Rhizome Planting", 7),
            TaskStep::new("Irrigation", 14),
            TaskStep::new("Mulching", 30),
            TaskStep::new("Weeding", 60),
            TaskStep::new("Organic Fertilizer", 90),
            TaskStep::new("Harvest", 240),
        ],
    },
    CropTaskTemplate {
        crop: "Ginger",
        steps: &[
            TaskStep::new("Soil Prep", 0),
            TaskStep::new("Rhizome Planting", 5),
            TaskStep::new("Irrigation", 10),
            TaskStep::new("Weeding", 30),
            TaskStep::new("Earthing up", 60),
            TaskStep::new("Fertilizing", 90),
            TaskStep::new("Harvest", 210),
        ],
    },
    CropTaskTemplate {
        crop: "Lemongrass",
        steps: &[
            TaskStep::new("Land Prep", 0),
            TaskStep::new("Transplanting", 7),
            TaskStep::new("Weeding", 21),
            TaskStep::new("Fertilization", 30),
            TaskStep::new("Irrigation", 45),
            TaskStep::new("Harvest", 150),
        ],
    },
    CropTaskTemplate {
        crop: "Moringa",
        steps: &[
            TaskStep::new("Land Prep", 0),
            TaskStep::new("Direct Seeding", 7),
            TaskStep::new("Irrigation", 14),
            TaskStep::new("Pruning", 60),
            TaskStep::new("Harvest", 90),
        ],
    },
    CropTaskTemplate {
        crop: "Aloe Vera",
        steps: &[
            TaskStep::new("Land Preparation", 0),
            TaskStep::new("Transplanting Suckers", 7),
            TaskStep::new("Irrigation", 14),
            TaskStep::new("Weeding", 30),
            TaskStep::new("Organic Fertilizer", 45),
            TaskStep::new("Harvest", 240),
        ],
    },
    CropTaskTemplate {
        crop: "Ashwagandha",
        steps: &[
            TaskStep::new("Soil Preparation", 0),
            TaskStep::new("Direct Sowing", 7),
            TaskStep::new("Weeding", 30),
            TaskStep::new("Organic Compost", 40),
            TaskStep::new("Harvest", 180),
        ],
    },
    CropTaskTemplate {
        crop: "Neem",
        steps: &[
            TaskStep::new("Site Selection", 0),
            TaskStep::new("Seedling Planting", 10),
            TaskStep::new("Weeding", 30),
            TaskStep::new("Irrigation (if needed)", 60),
            TaskStep::new("Harvest", 365),
        ],
    },
    CropTaskTemplate {
        crop: "Hibiscus",
        steps: &[
            TaskStep::new("Land Prep", 0),
            TaskStep::new("Transplanting", 7),
            TaskStep::new("Weeding", 21),
            TaskStep::new("Fertilizing", 40),
            TaskStep::new("Harvest", 120),
        ],
    },
    CropTaskTemplate {
        crop: "Butterfly Pea",
        steps: &[
            TaskStep::new("Soil Prep", 0),
            TaskStep::new("Direct Seeding", 5),
            TaskStep::new("Weeding", 20),
            TaskStep::new("Staking", 40),
            TaskStep::new("Harvest", 90),
        ],
    },
    CropTaskTemplate {
        crop: "Soursop",
        steps: &[
            TaskStep::new("Site Prep", 0),
            TaskStep::new("Seedling Transplanting", 10),
            TaskStep::new("Weeding", 30),
            TaskStep::new("Pruning", 90),
            TaskStep::new("Harvest", 365),
        ],
    },
    CropTaskTemplate {
        crop: "Banana",
        steps: &[
            TaskStep::new("Land Prep", 0),
            TaskStep::new("Sucker Planting", 7),
            TaskStep::new("Irrigation", 14),
            TaskStep::new("Manuring", 30),
            TaskStep::new("Desuckering", 60),
            TaskStep::new("Harvest", 300),
        ],
    },
    CropTaskTemplate {
        crop: "Papaya",
        steps: &[
            TaskStep::new("Soil Prep", 0),
            TaskStep::new("Transplanting", 10),
            TaskStep::new("Weeding", 20),
            TaskStep::new("Fertilization", 30),
            TaskStep::new("Harvest", 240),
        ],
    },
    CropTaskTemplate {
        crop: "Dragon Fruit",
        steps: &[
            TaskStep::new("Land Prep", 0),
            TaskStep::new("Pole Setup", 7),
            TaskStep::new("Planting", 14),
            TaskStep::new("Training", 60),
            TaskStep::new("Fertilization", 90),
            TaskStep::new("Harvest", 180),
        ],
    },
    CropTaskTemplate {
        crop: "Watermelon",
        steps: &[
            TaskStep::new("Land Prep", 0),
            TaskStep::new("Seeding", 5),
            TaskStep::new("Weeding", 15),
            TaskStep::new("Irrigation", 20),
            TaskStep::new("Harvest", 80),
        ],
    },
    CropTaskTemplate {
        crop: "Purple Sweet Potato",
        steps: &[
            TaskStep::new("Soil Prep", 0),
            TaskStep::new("Vine Planting", 7),
            TaskStep::new("Irrigation", 14),
            TaskStep::new("Weeding", 30),
            TaskStep::new("Harvest", 120),
        ],
    },
    CropTaskTemplate {
        crop: "Cassava",
        steps: &[
            TaskStep::new("Land Prep", 0),
            TaskStep::new("Stem Planting", 7),
            TaskStep::new("Irrigation", 21),
            TaskStep::new("Weeding", 60),
            TaskStep::new("Harvest", 270),
        ],
    },
    CropTaskTemplate {
        crop: "Yellow Malanga",
        steps: &[
            TaskStep::new("Soil Prep", 0),
            TaskStep::new("Corm Planting", 5),
            TaskStep::new("Irrigation", 10),
            TaskStep::new("Fertilizing", 30),
            TaskStep::new("Harvest", 180),
        ],
    },
    CropTaskTemplate {
        crop: "Groundnuts",
        steps: &[
            TaskStep::new("Land Prep", 0),
            TaskStep::new("Sowing", 5),
            TaskStep::new("Weeding", 20),
            TaskStep::new("Earthing Up", 35),
            TaskStep::new("Harvest", 110),
        ],
    },
    CropTaskTemplate {
        crop: "Bitter Gourd",
        steps: &[
            TaskStep::new("Soil Prep", 0),
            TaskStep::new("Direct Sowing", 5),
            TaskStep::new("Staking", 20),
            TaskStep::new("Weeding", 25),
            TaskStep::new("Harvest", 80),
        ],
    },
    CropTaskTemplate {
        crop: "Tomato",
        steps: &[
            TaskStep::new("Nursery Prep", 0),
            TaskStep::new("Transplanting", 21),
            TaskStep::new("Staking", 30),
            TaskStep::new("Fertilizing", 40),
            TaskStep::new("Harvest", 90),
        ],
    },
    CropTaskTemplate {
        crop: "Eggplant",
        steps: &[
            TaskStep::new("Nursery Setup", 0),
            TaskStep::new("Transplanting", 21),
            TaskStep::new("Weeding", 30),
            TaskStep::new("Organic Fertilizer", 45),
            TaskStep::new("Harvest", 100),
        ],
    },
    CropTaskTemplate {
        crop: "Rice",
        steps: &[
            TaskStep::new("Land Prep", 0),
            TaskStep::new("Sowing", 7),
            TaskStep::new("Weeding", 30),
            TaskStep::new("Irrigation", 45),
            TaskStep::new("Harvest", 120),
        ],
    },
    CropTaskTemplate {
        crop: "Corn",
        steps: &[
            TaskStep::new("Land Prep", 0),
            TaskStep::new("Direct Sowing", 5),
            TaskStep::new("Weeding", 20),
            TaskStep::new("Earthing", 40),
            TaskStep::new("Harvest", 100),
        ],
    },
    CropTaskTemplate {
        crop: "Sugarcane",
        steps: &[
            TaskStep::new("Soil Prep", 0),
            TaskStep::new("Setts Planting", 10),
            TaskStep::new("Irrigation", 30),
            TaskStep::new("Earthing Up", 60),
            TaskStep::new("Harvest", 365),
        ],
    },
    CropTaskTemplate {
        crop: "Coffee",
        steps: &[
            TaskStep::new("Land Prep", 0),
            TaskStep::new("Seedling Transplanting", 14),
            TaskStep::new("Shading", 30),
            TaskStep::new("Pruning", 90),
            TaskStep::new("Harvest", 540),
        ],
    },
    CropTaskTemplate {
        crop: "Cacao",
        steps: &[
            TaskStep::new("Nursery Setup", 0),
            TaskStep::new("Field Transplant", 60),
            TaskStep::new("Mulching", 90),
            TaskStep::new("Canopy Management", 120),
            TaskStep::new("Harvest", 540),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_ends_in_harvest() {
        for template in CROP_TASKS {
            let last = template.steps.last().expect("template has steps");
            assert_eq!(last.label, "Harvest", "{} has no harvest step", template.crop);
            assert_eq!(last.offset_days, template.span_days());
        }
    }

    #[test]
    fn test_crop_names_unique() {
        let mut names: Vec<&str> = CROP_TASKS.iter().map(|t| t.crop).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CROP_TASKS.len());
        assert_eq!(CROP_TASKS.len(), 26);
    }
}
