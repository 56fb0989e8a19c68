use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::ScheduledTask;

/// One horizontal bar of a timeline chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttBar {
    /// `"{crop} – {task}"`
    pub label: String,
    pub crop: String,
    pub start: NaiveDate,
    /// Same as `start` for single-date reminders
    pub finish: NaiveDate,
    pub duration_days: i64,
}

impl From<&ScheduledTask> for GanttBar {
    fn from(task: &ScheduledTask) -> Self {
        GanttBar {
            label: format!("{} – {}", task.crop, task.task),
            crop: task.crop.clone(),
            start: task.start_date,
            finish: task.end_date.unwrap_or(task.start_date),
            duration_days: task.duration_days(),
        }
    }
}

/// Chart model for a schedule, one bar per task in schedule order
pub fn gantt_bars(tasks: &[ScheduledTask]) -> Vec<GanttBar> {
    tasks.iter().map(GanttBar::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{generate_reminders, generate_schedule};

    #[test]
    fn test_bars_follow_tasks() {
        let anchor = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let bars = gantt_bars(&generate_schedule("Tomato", anchor, 3));
        assert_eq!(bars.len(), 5);
        assert_eq!(bars[1].label, "Tomato – Transplanting");
        assert!(bars.iter().all(|b| b.duration_days == 3));

        let milestones = gantt_bars(&generate_reminders("Tomato", anchor));
        assert!(milestones.iter().all(|b| b.start == b.finish && b.duration_days == 0));
    }
}
