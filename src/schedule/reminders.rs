//! Single-date crop calendar: harvest date, growing duration and field
//! operation reminders sized from the maturity catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{field_operations, in_typhoon_season, materialize, maturity_days, shift, ScheduledTask};

pub const TYPHOON_SEASON_WARNING: &str =
    "July–September is typhoon season. Consider using raised beds or rain shields.";

/// Header block of the single-date crop calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropCalendarSummary {
    pub crop: String,
    pub planting_date: NaiveDate,
    pub harvest_date: NaiveDate,
    pub growing_days: u32,
    /// False when the 90-day default stood in for a missing maturity entry
    pub maturity_known: bool,
    pub advisory: Option<String>,
}

/// Reminder-mode schedule (no work window, `end_date = None`)
///
/// Uses the generic field-operation template for every crop, with the
/// pre-harvest inspection and harvest placed by the crop's maturity.
pub fn generate_reminders(crop: &str, planting_date: NaiveDate) -> Vec<ScheduledTask> {
    let (days, _) = maturity_days(crop);
    materialize(crop, &field_operations(days), planting_date, None)
}

/// Seasonal warning for a planting date, if any
pub fn planting_advisory(planting_date: NaiveDate) -> Option<&'static str> {
    in_typhoon_season(planting_date).then_some(TYPHOON_SEASON_WARNING)
}

pub fn summarize_calendar(crop: &str, planting_date: NaiveDate) -> CropCalendarSummary {
    let (growing_days, maturity_known) = maturity_days(crop);
    CropCalendarSummary {
        crop: crop.to_string(),
        planting_date,
        harvest_date: shift(planting_date, growing_days),
        growing_days,
        maturity_known,
        advisory: planting_advisory(planting_date).map(str::to_string),
    }
}
