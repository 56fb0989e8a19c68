//! Crop Maturity Durations
//!
//! Days from planting to expected harvest, used by the single-date calendar
//! (harvest date + reminder schedule). This catalog is maintained separately
//! from the task templates and its crop set differs from theirs.

/// Maturity assumed for crops missing from [`CROP_MATURITY`]
pub const DEFAULT_MATURITY_DAYS: u32 = 90;

pub(crate) static CROP_MATURITY: &[(&str, u32)] = &[
    ("Turmeric", 240),
    ("Annatto", 180),
    ("Butterfly Pea", 90),
    ("Hibiscus", 100),
    ("Neem", 365),
    ("Moringa", 90),
    ("Aloe Vera", 150),
    ("Ginger", 210),
    ("Ashwagandha", 180),
    ("Lemongrass", 120),
    ("Purple Sweet Potato", 120),
    ("Cassava", 300),
    ("Yellow Malanga", 270),
    ("Groundnuts", 110),
    ("Bitter Gourd", 70),
    ("Tomato", 90),
    ("Eggplant", 100),
    ("Bell Pepper", 90),
    ("Chili Pepper", 120),
    ("Soursop", 365),
    ("Watermelon", 90),
];
