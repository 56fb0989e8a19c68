//! Farm Session & Activity Logbook
//!
//! Working state for one planning session: the farm being planned and the
//! field activities recorded against it. Owned by the caller and passed
//! into the planner explicitly; nothing here is global.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ensure_non_negative, PlannerError, Result};
use crate::schedule::{generate_farm_calendar, FarmCalendar};

/// Farm name used when the user gives none
pub fn farm_name_for(location: &str) -> String {
    format!("AgriVigor Green Farm – {}", location)
}

/// The farm being planned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmSession {
    pub farm_name: String,
    pub location: String,
    pub farm_size_ha: f64,
    pub selected_crops: Vec<String>,
    pub planting_date: NaiveDate,
}

impl FarmSession {
    /// New session with the default farm name for `location`
    pub fn new(location: &str, farm_size_ha: f64, planting_date: NaiveDate) -> Result<Self> {
        Ok(Self {
            farm_name: farm_name_for(location),
            location: location.to_string(),
            farm_size_ha: ensure_non_negative("farm_size_ha", farm_size_ha)?,
            selected_crops: Vec::new(),
            planting_date,
        })
    }

    /// Add a crop to the selection; duplicates are ignored
    pub fn select_crop(&mut self, crop: &str) -> bool {
        if self.selected_crops.iter().any(|c| c == crop) {
            return false;
        }
        self.selected_crops.push(crop.to_string());
        true
    }

    /// Merged timeline for every selected crop
    pub fn calendar(&self, task_duration_days: u32) -> FarmCalendar {
        generate_farm_calendar(&self.selected_crops, self.planting_date, task_duration_days)
    }
}

// ============================================================================
// ACTIVITY LOGBOOK
// ============================================================================

/// Kind of field activity recorded in the logbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    LandPreparation,
    SowingPlanting,
    Weeding,
    Irrigation,
    OrganicInputApplication,
    PestDiseaseMonitoring,
    Harvesting,
    TrainingPruning,
    LaborEntry,
    Other,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 10] = [
        ActivityKind::LandPreparation,
        ActivityKind::SowingPlanting,
        ActivityKind::Weeding,
        ActivityKind::Irrigation,
        ActivityKind::OrganicInputApplication,
        ActivityKind::PestDiseaseMonitoring,
        ActivityKind::Harvesting,
        ActivityKind::TrainingPruning,
        ActivityKind::LaborEntry,
        ActivityKind::Other,
    ];

    pub fn display_text(&self) -> &'static str {
        match self {
            ActivityKind::LandPreparation => "Land Preparation",
            ActivityKind::SowingPlanting => "Sowing/Planting",
            ActivityKind::Weeding => "Weeding",
            ActivityKind::Irrigation => "Irrigation",
            ActivityKind::OrganicInputApplication => "Organic Input Application",
            ActivityKind::PestDiseaseMonitoring => "Pest/Disease Monitoring",
            ActivityKind::Harvesting => "Harvesting",
            ActivityKind::TrainingPruning => "Training/Pruning",
            ActivityKind::LaborEntry => "Labor Entry",
            ActivityKind::Other => "Other",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

impl FromStr for ActivityKind {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.display_text().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlannerError::UnknownActivity(s.to_string()))
    }
}

/// One logbook line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub date: NaiveDate,
    pub crop: String,
    pub activity: ActivityKind,
    pub notes: String,
    pub location: String,
}

/// Append-only record of field activities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: ActivityEntry) {
        tracing::debug!(
            crop = %entry.crop,
            activity = %entry.activity,
            date = %entry.date,
            "activity recorded"
        );
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries on `date`, optionally restricted to one crop (`None` = all crops)
    pub fn filter<'a>(
        &'a self,
        crop: Option<&'a str>,
        date: NaiveDate,
    ) -> impl Iterator<Item = &'a ActivityEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.date == date && crop.map_or(true, |c| e.crop == c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(date: NaiveDate, crop: &str, activity: ActivityKind) -> ActivityEntry {
        ActivityEntry {
            date,
            crop: crop.to_string(),
            activity,
            notes: String::new(),
            location: "Paramaribo".to_string(),
        }
    }

    #[test]
    fn test_default_farm_name() {
        let session = FarmSession::new("Paramaribo", 2.5, ymd(2025, 1, 1)).unwrap();
        assert_eq!(session.farm_name, "AgriVigor Green Farm – Paramaribo");
        assert!(FarmSession::new("Paramaribo", -1.0, ymd(2025, 1, 1)).is_err());
    }

    #[test]
    fn test_select_crop_ignores_duplicates() {
        let mut session = FarmSession::new("Nickerie", 10.0, ymd(2025, 1, 1)).unwrap();
        assert!(session.select_crop("Rice"));
        assert!(session.select_crop("Tomato"));
        assert!(!session.select_crop("Rice"));
        assert_eq!(session.selected_crops, vec!["Rice", "Tomato"]);
        assert_eq!(session.calendar(3).tasks.len(), 10);
    }

    #[test]
    fn test_activity_kind_parsing() {
        assert_eq!("Sowing/Planting".parse::<ActivityKind>().unwrap(), ActivityKind::SowingPlanting);
        assert_eq!("labor entry".parse::<ActivityKind>().unwrap(), ActivityKind::LaborEntry);
        assert!(matches!(
            "Spraying".parse::<ActivityKind>(),
            Err(PlannerError::UnknownActivity(_))
        ));
        for kind in ActivityKind::ALL {
            assert_eq!(kind.to_string().parse::<ActivityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_filter_by_crop_and_date() {
        let mut log = ActivityLog::new();
        log.record(entry(ymd(2025, 3, 1), "Rice", ActivityKind::Weeding));
        log.record(entry(ymd(2025, 3, 1), "Tomato", ActivityKind::Irrigation));
        log.record(entry(ymd(2025, 3, 2), "Rice", ActivityKind::Harvesting));

        assert_eq!(log.filter(None, ymd(2025, 3, 1)).count(), 2);
        assert_eq!(log.filter(Some("Rice"), ymd(2025, 3, 1)).count(), 1);
        assert_eq!(log.filter(Some("Cassava"), ymd(2025, 3, 1)).count(), 0);
        assert_eq!(log.len(), 3);
    }
}
