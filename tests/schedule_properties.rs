// Schedule generator properties
//
// Run with: cargo test --test schedule_properties

use chrono::{Days, NaiveDate};
use farmops_planner::catalog::{crop_names, lookup_tasks, CatalogKind, Texture};
use farmops_planner::projection::project;
use farmops_planner::schedule::{compute_harvest_date, generate_schedule, HARVEST_TASK};
use farmops_planner::suitability::evaluate_soil;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn anchors() -> Vec<NaiveDate> {
    vec![ymd(2024, 2, 29), ymd(2025, 1, 1), ymd(2025, 7, 15), ymd(2025, 12, 31)]
}

// ============================================================================
// Schedule generation
// ============================================================================

#[test]
fn test_schedule_is_deterministic() {
    for crop in crop_names(CatalogKind::Tasks) {
        let a = generate_schedule(crop, ymd(2025, 3, 10), 3);
        let b = generate_schedule(crop, ymd(2025, 3, 10), 3);
        assert_eq!(a, b, "{} schedule differs between calls", crop);
    }
}

#[test]
fn test_schedule_sorted_by_start_date() {
    for crop in crop_names(CatalogKind::Tasks) {
        for anchor in anchors() {
            let tasks = generate_schedule(crop, anchor, 3);
            assert!(
                tasks.windows(2).all(|w| w[0].start_date <= w[1].start_date),
                "{} schedule out of order",
                crop
            );
        }
    }
}

#[test]
fn test_start_dates_match_offsets() {
    for crop in crop_names(CatalogKind::Tasks) {
        let template = lookup_tasks(crop).unwrap();
        for anchor in anchors() {
            let tasks = generate_schedule(crop, anchor, 3);
            assert_eq!(tasks.len(), template.steps.len());

            for step in template.steps {
                let expected = anchor + Days::new(u64::from(step.offset_days));
                assert!(
                    tasks
                        .iter()
                        .any(|t| t.task == step.label && t.start_date == expected),
                    "{} / {} not at anchor + {}",
                    crop,
                    step.label,
                    step.offset_days
                );
            }
        }
    }
}

#[test]
fn test_end_date_is_start_plus_duration() {
    for duration in [0u32, 3, 14] {
        for task in generate_schedule("Ginger", ymd(2025, 4, 1), duration) {
            let end = task.end_date.unwrap();
            assert_eq!((end - task.start_date).num_days(), i64::from(duration));
        }
    }
}

#[test]
fn test_unknown_crop_gets_default_schedule() {
    let tasks = generate_schedule("NonexistentCrop123", ymd(2025, 1, 1), 3);
    assert!(!tasks.is_empty());
    let harvest = tasks.iter().find(|t| t.task == HARVEST_TASK).unwrap();
    assert_eq!(harvest.start_date, ymd(2025, 4, 1));
}

#[test]
fn test_crop_names_are_case_sensitive() {
    // "tomato" is not "Tomato": falls back to the generic template
    let tasks = generate_schedule("tomato", ymd(2025, 1, 1), 3);
    assert_eq!(tasks[0].task, "Land Preparation");
}

#[test]
fn test_tomato_example() {
    let tasks = generate_schedule("Tomato", ymd(2025, 1, 1), 3);
    let expected = [
        ("Nursery Prep", ymd(2025, 1, 1)),
        ("Transplanting", ymd(2025, 1, 22)),
        ("Staking", ymd(2025, 1, 31)),
        ("Fertilizing", ymd(2025, 2, 10)),
        ("Harvest", ymd(2025, 4, 1)),
    ];

    assert_eq!(tasks.len(), expected.len());
    for (task, (label, start)) in tasks.iter().zip(expected) {
        assert_eq!(task.crop, "Tomato");
        assert_eq!(task.task, label);
        assert_eq!(task.start_date, start);
        assert_eq!(task.end_date, Some(start + Days::new(3)));
    }
}

// ============================================================================
// Harvest date
// ============================================================================

#[test]
fn test_harvest_offset_independent_of_anchor() {
    for crop in ["Turmeric", "Bitter Gourd", "Soursop", "NonexistentCrop123"] {
        let d1 = ymd(2024, 1, 15);
        let d2 = ymd(2025, 9, 3);
        let h1 = compute_harvest_date(crop, d1);
        let h2 = compute_harvest_date(crop, d2);
        assert_eq!(h2 - h1, d2 - d1, "{}", crop);
    }
}

// ============================================================================
// Soil thresholds
// ============================================================================

#[test]
fn test_ph_lower_bound_inclusive() {
    for crop in crop_names(CatalogKind::Soil) {
        let profile = farmops_planner::lookup_soil_profile(crop).unwrap();
        let om = profile.organic_matter_min;
        let at_min = evaluate_soil(crop, profile.ph_min, om, 100, Texture::Loamy).unwrap();
        assert!(at_min.report().unwrap().ph_ok, "{} rejects ph_min", crop);

        let below = evaluate_soil(crop, profile.ph_min - 0.01, om, 100, Texture::Loamy).unwrap();
        assert!(!below.report().unwrap().ph_ok, "{} accepts ph_min - 0.01", crop);
    }
}

#[test]
fn test_moisture_has_no_ceiling() {
    for crop in crop_names(CatalogKind::Soil) {
        let profile = farmops_planner::lookup_soil_profile(crop).unwrap();
        let eval = evaluate_soil(crop, profile.ph_min, profile.organic_matter_min, 1_000, Texture::Clay)
            .unwrap();
        assert!(eval.report().unwrap().moisture_ok, "{}", crop);
    }
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn test_projection_example() {
    let years = project(30.0, 4500.0, 300.0, 5.0, 3).unwrap();
    let prices = [315.0, 330.75, 347.2875];
    let revenues = [9450.0, 9922.5, 10418.625];
    let profits = [4950.0, 5422.5, 5918.625];

    for (i, year) in years.iter().enumerate() {
        approx::assert_abs_diff_eq!(year.price, prices[i], epsilon = 1e-6);
        approx::assert_abs_diff_eq!(year.revenue, revenues[i], epsilon = 1e-6);
        approx::assert_abs_diff_eq!(year.profit, profits[i], epsilon = 1e-6);
    }
}
