//! Farm Calendar
//!
//! Merged timeline for every crop selected on a farm. Crops are expanded in
//! parallel, then merged and stably sorted by start date so that crop
//! selection order breaks ties.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{materialize, ScheduledTask};
use crate::catalog::lookup_tasks;

/// Timeline rows for all selected crops
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmCalendar {
    pub planting_date: NaiveDate,
    pub tasks: Vec<ScheduledTask>,
    /// Selected crops without a task template (contribute no rows)
    pub missing_crops: Vec<String>,
}

impl FarmCalendar {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks of one crop, in timeline order
    pub fn tasks_for<'a>(&'a self, crop: &'a str) -> impl Iterator<Item = &'a ScheduledTask> + 'a {
        self.tasks.iter().filter(move |t| t.crop == crop)
    }
}

/// Build the farm-wide timeline for `crops` planted on `planting_date`
///
/// Unlike [`super::generate_schedule`], crops without a template are not
/// padded with the generic schedule; they are listed in
/// [`FarmCalendar::missing_crops`] instead.
pub fn generate_farm_calendar<S: AsRef<str> + Sync>(
    crops: &[S],
    planting_date: NaiveDate,
    task_duration_days: u32,
) -> FarmCalendar {
    let per_crop: Vec<(&str, Option<Vec<ScheduledTask>>)> = crops
        .par_iter()
        .map(|crop| {
            let crop = crop.as_ref();
            let tasks = lookup_tasks(crop).map(|template| {
                materialize(crop, template.steps, planting_date, Some(task_duration_days))
            });
            (crop, tasks)
        })
        .collect();

    let mut calendar = FarmCalendar {
        planting_date,
        tasks: Vec::new(),
        missing_crops: Vec::new(),
    };
    for (crop, tasks) in per_crop {
        match tasks {
            Some(tasks) => calendar.tasks.extend(tasks),
            None => calendar.missing_crops.push(crop.to_string()),
        }
    }
    calendar.tasks.sort_by_key(|t| t.start_date);

    tracing::debug!(
        crops = crops.len(),
        tasks = calendar.tasks.len(),
        missing = calendar.missing_crops.len(),
        "built farm calendar"
    );

    calendar
}
