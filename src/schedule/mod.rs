//! Crop Task Schedule Generator
//!
//! Maps (crop, anchor date) to an ordered list of dated field operations.
//!
//! Two modes share the same output type:
//! - timeline mode (`generate_schedule`): per-crop task template, every task
//!   gets a fixed work window (`end_date = start_date + task_duration_days`)
//! - reminder mode (`reminders::generate_reminders`): generic field-operation
//!   template sized from the maturity catalog, single-date tasks (`end_date = None`)
//!
//! Unknown crops never fail. Timeline mode falls back to the generic
//! field-operation template sized for [`DEFAULT_MATURITY_DAYS`].
//!
//! All functions are pure: same inputs, same output, no shared mutable state.

pub mod calendar;
pub mod reminders;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::{lookup_maturity, lookup_tasks, TaskStep, DEFAULT_MATURITY_DAYS};

pub use calendar::{generate_farm_calendar, FarmCalendar};
pub use reminders::{
    generate_reminders, planting_advisory, summarize_calendar, CropCalendarSummary,
    TYPHOON_SEASON_WARNING,
};

/// Work window applied to each task in timeline mode
pub const DEFAULT_TASK_DURATION_DAYS: u32 = 3;

/// One dated field operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub crop: String,
    pub task: String,
    pub start_date: NaiveDate,
    /// `None` for single-date reminders
    pub end_date: Option<NaiveDate>,
}

impl ScheduledTask {
    /// Length of the work window in days (0 for single-date reminders)
    pub fn duration_days(&self) -> i64 {
        self.end_date
            .map(|end| (end - self.start_date).num_days())
            .unwrap_or(0)
    }
}

// ============================================================================
// GENERIC FIELD-OPERATION TEMPLATE
// ============================================================================

/// Label of the final event in every schedule
pub const HARVEST_TASK: &str = "Harvest";

/// Generic field operations for a crop maturing after `maturity_days`
///
/// Fixed early operations, then a pre-harvest inspection 10 days before
/// harvest and the harvest itself.
pub fn field_operations(maturity_days: u32) -> Vec<TaskStep> {
    vec![
        TaskStep::new("Land Preparation", 0),
        TaskStep::new("Sowing/Transplanting", 7),
        TaskStep::new("Weeding", 21),
        TaskStep::new("Organic Fertilization", 30),
        TaskStep::new("Pest & Disease Monitoring", 45),
        TaskStep::new("Second Fertilization", 60),
        TaskStep::new("Pre-Harvest Inspection", maturity_days.saturating_sub(10)),
        TaskStep::new(HARVEST_TASK, maturity_days),
    ]
}

// ============================================================================
// DATE ARITHMETIC
// ============================================================================

/// `date + days`, saturating at the last representable date
pub(crate) fn shift(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Dated tasks for a list of steps, stably sorted by start date
pub(crate) fn materialize(
    crop: &str,
    steps: &[TaskStep],
    anchor_date: NaiveDate,
    task_duration_days: Option<u32>,
) -> Vec<ScheduledTask> {
    let mut tasks: Vec<ScheduledTask> = steps
        .iter()
        .map(|step| {
            let start_date = shift(anchor_date, step.offset_days);
            ScheduledTask {
                crop: crop.to_string(),
                task: step.label.to_string(),
                start_date,
                end_date: task_duration_days.map(|d| shift(start_date, d)),
            }
        })
        .collect();

    // Stable: equal start dates keep template order
    tasks.sort_by_key(|t| t.start_date);
    tasks
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Generate the timeline-mode schedule for one crop
///
/// Each template step becomes a task starting `offset_days` after
/// `anchor_date` and ending `task_duration_days` later. Crops without a
/// template get the generic field-operation schedule for a
/// [`DEFAULT_MATURITY_DAYS`]-day crop.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use farmops_planner::schedule::generate_schedule;
///
/// let anchor = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let tasks = generate_schedule("Tomato", anchor, 3);
/// assert_eq!(tasks.len(), 5);
/// assert_eq!(tasks[4].task, "Harvest");
/// assert_eq!(tasks[4].start_date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
/// ```
pub fn generate_schedule(
    crop: &str,
    anchor_date: NaiveDate,
    task_duration_days: u32,
) -> Vec<ScheduledTask> {
    match lookup_tasks(crop) {
        Some(template) => materialize(crop, template.steps, anchor_date, Some(task_duration_days)),
        None => {
            tracing::warn!(
                crop,
                maturity_days = DEFAULT_MATURITY_DAYS,
                "no task template, using generic field operations"
            );
            materialize(
                crop,
                &field_operations(DEFAULT_MATURITY_DAYS),
                anchor_date,
                Some(task_duration_days),
            )
        }
    }
}

/// Days to maturity for a crop, and whether it came from the catalog
pub fn maturity_days(crop: &str) -> (u32, bool) {
    match lookup_maturity(crop) {
        Some(days) => (days, true),
        None => {
            tracing::debug!(crop, default = DEFAULT_MATURITY_DAYS, "unknown maturity");
            (DEFAULT_MATURITY_DAYS, false)
        }
    }
}

/// Expected harvest date: planting date plus the crop's maturity duration
///
/// Crops missing from the maturity catalog mature in
/// [`DEFAULT_MATURITY_DAYS`] days.
pub fn compute_harvest_date(crop: &str, planting_date: NaiveDate) -> NaiveDate {
    let (days, _) = maturity_days(crop);
    shift(planting_date, days)
}

/// True when a date falls in the July-September typhoon season
pub fn in_typhoon_season(date: NaiveDate) -> bool {
    matches!(date.month(), 7..=9)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_tomato_schedule() {
        let tasks = generate_schedule("Tomato", ymd(2025, 1, 1), 3);
        let starts: Vec<NaiveDate> = tasks.iter().map(|t| t.start_date).collect();
        assert_eq!(
            starts,
            vec![
                ymd(2025, 1, 1),
                ymd(2025, 1, 22),
                ymd(2025, 1, 31),
                ymd(2025, 2, 10),
                ymd(2025, 4, 1),
            ]
        );
        for t in &tasks {
            assert_eq!(t.end_date, Some(shift(t.start_date, 3)));
            assert_eq!(t.duration_days(), 3);
        }
    }

    #[test]
    fn test_unknown_crop_uses_generic_operations() {
        let tasks = generate_schedule("NonexistentCrop123", ymd(2025, 1, 1), 3);
        assert_eq!(tasks.len(), 8);
        let harvest = tasks.last().unwrap();
        assert_eq!(harvest.task, HARVEST_TASK);
        assert_eq!(harvest.start_date, ymd(2025, 4, 1));
        assert!(tasks.iter().all(|t| t.crop == "NonexistentCrop123"));
    }

    #[test]
    fn test_zero_duration_window() {
        let tasks = generate_schedule("Rice", ymd(2025, 6, 1), 0);
        assert!(tasks.iter().all(|t| t.end_date == Some(t.start_date)));
    }

    #[test]
    fn test_equal_offsets_keep_template_order() {
        let steps = [
            TaskStep::new("B", 5),
            TaskStep::new("A", 0),
            TaskStep::new("C", 5),
        ];
        let tasks = materialize("X", &steps, ymd(2025, 1, 1), None);
        let labels: Vec<&str> = tasks.iter().map(|t| t.task.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert!(tasks.iter().all(|t| t.end_date.is_none()));
    }

    #[test]
    fn test_harvest_date_lookup_and_default() {
        assert_eq!(compute_harvest_date("Bitter Gourd", ymd(2025, 1, 1)), ymd(2025, 3, 12));
        assert_eq!(compute_harvest_date("Durian", ymd(2025, 1, 1)), ymd(2025, 4, 1));
    }

    #[test]
    fn test_shift_saturates() {
        assert_eq!(shift(NaiveDate::MAX, 1), NaiveDate::MAX);
    }

    #[test]
    fn test_pre_harvest_inspection_never_underflows() {
        let ops = field_operations(5);
        assert_eq!(ops[6].offset_days, 0);
        assert_eq!(ops[7].offset_days, 5);
    }

    #[test]
    fn test_typhoon_season_months() {
        assert!(!in_typhoon_season(ymd(2025, 6, 30)));
        assert!(in_typhoon_season(ymd(2025, 7, 1)));
        assert!(in_typhoon_season(ymd(2025, 9, 30)));
        assert!(!in_typhoon_season(ymd(2025, 10, 1)));
    }
}
