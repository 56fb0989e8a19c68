use crate::catalog::{CropGuidance, ManagementGuidelines};
use crate::projection::YearProjection;
use crate::schedule::{CropCalendarSummary, FarmCalendar, ScheduledTask};
use crate::suitability::{ElevationAssessment, SoilEvaluation};
use crate::weather::WeatherAlert;

const DATE_FORMAT: &str = "%Y-%m-%d";
const LONG_DATE_FORMAT: &str = "%B %d, %Y";

fn pass_mark(ok: bool) -> &'static str {
    if ok { "✅" } else { "❌" }
}

/// Markdown formatter for planner outputs
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Task table for one crop
    pub fn format_schedule(crop: &str, tasks: &[ScheduledTask]) -> String {
        let mut md = String::with_capacity(512);
        md.push_str(&format!("## {} Task Schedule\n\n", crop));
        Self::push_task_table(&mut md, tasks, false);
        md
    }

    /// Merged timeline for all selected crops
    pub fn format_farm_calendar(calendar: &FarmCalendar) -> String {
        let mut md = String::with_capacity(1024);
        md.push_str("## Farm Calendar\n\n");
        md.push_str(&format!(
            "**Planting Date:** {}\n\n",
            calendar.planting_date.format(LONG_DATE_FORMAT)
        ));

        if calendar.is_empty() {
            md.push_str("No task templates available for the selected crops.\n\n");
        } else {
            Self::push_task_table(&mut md, &calendar.tasks, true);
        }

        if !calendar.missing_crops.is_empty() {
            md.push_str(&format!(
                "⚠️ No task template for: {}\n\n",
                calendar.missing_crops.join(", ")
            ));
        }
        md
    }

    fn push_task_table(md: &mut String, tasks: &[ScheduledTask], with_crop: bool) {
        if with_crop {
            md.push_str("| Crop | Task | Start | End |\n");
            md.push_str("|------|------|-------|-----|\n");
        } else {
            md.push_str("| Task | Start | End |\n");
            md.push_str("|------|-------|-----|\n");
        }
        for task in tasks {
            let end = task
                .end_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default();
            if with_crop {
                md.push_str(&format!("| {} ", task.crop));
            }
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                task.task,
                task.start_date.format(DATE_FORMAT),
                end
            ));
        }
        md.push('\n');
    }

    /// Single-date calendar header
    pub fn format_calendar_summary(summary: &CropCalendarSummary) -> String {
        let mut md = String::with_capacity(512);
        md.push_str("## Crop Calendar Summary\n\n");
        md.push_str(&format!("**Crop:** {}  \n", summary.crop));
        md.push_str(&format!(
            "**Planting Date:** {}  \n",
            summary.planting_date.format(LONG_DATE_FORMAT)
        ));
        md.push_str(&format!(
            "**Expected Harvest:** {}  \n",
            summary.harvest_date.format(LONG_DATE_FORMAT)
        ));
        md.push_str(&format!("**Growing Duration:** {} days", summary.growing_days));
        if !summary.maturity_known {
            md.push_str(" (default)");
        }
        md.push_str("\n\n");

        if let Some(advisory) = &summary.advisory {
            md.push_str(&format!("⚠️ {}\n\n", advisory));
        }
        md
    }

    /// Soil suitability report
    pub fn format_soil_evaluation(evaluation: &SoilEvaluation) -> String {
        let mut md = String::with_capacity(1024);

        let report = match evaluation {
            SoilEvaluation::Assessed(report) => report,
            SoilEvaluation::NoData { crop } => {
                md.push_str(&format!("## Soil Suitability: {}\n\n", crop));
                md.push_str("No soil data available for this crop.\n\n");
                return md;
            }
        };

        md.push_str(&format!("## Soil Suitability: {}\n\n", report.crop));
        md.push_str("| Parameter | Measured | Ideal | Status |\n");
        md.push_str("|-----------|----------|-------|--------|\n");
        md.push_str(&format!(
            "| pH | {:.1} | {:.1}–{:.1} | {} |\n",
            report.reading.ph,
            report.ph_range.0,
            report.ph_range.1,
            pass_mark(report.ph_ok)
        ));
        md.push_str(&format!(
            "| Organic Matter (%) | {:.1} | {:.1}–{:.1} | {} |\n",
            report.reading.organic_matter_pct,
            report.organic_matter_range.0,
            report.organic_matter_range.1,
            pass_mark(report.organic_matter_ok)
        ));
        md.push_str(&format!(
            "| Moisture (%) | {} | ≥ {} | {} |\n\n",
            report.reading.moisture_pct,
            report.moisture_threshold_percent,
            pass_mark(report.moisture_ok)
        ));

        md.push_str(&format!(
            "**Irrigation ({} soil):** {}\n\n",
            report.reading.texture, report.irrigation_interval
        ));

        if report.advisories.is_empty() {
            md.push_str("Soil conditions are within the ideal range.\n\n");
        } else {
            md.push_str("### Recommendations\n\n");
            for advice in &report.advisories {
                md.push_str(&format!("- {}\n", advice));
            }
            md.push('\n');
        }
        md
    }

    pub fn format_elevation(assessment: &ElevationAssessment) -> String {
        let icon = if assessment.acceptable { "✅" } else { "⚠️" };
        format!(
            "**Elevation ({:.0} m):** {} {}\n\n",
            assessment.elevation_m, icon, assessment.message
        )
    }

    /// Year-by-year projection table
    pub fn format_projection(crop: &str, years: &[YearProjection]) -> String {
        let mut md = String::with_capacity(512);
        md.push_str(&format!("## {} Financial Projection\n\n", crop));
        md.push_str("| Year | Price (USD/t) | Revenue (USD/ha) | Profit (USD/ha) |\n");
        md.push_str("|------|---------------|------------------|-----------------|\n");
        for year in years {
            md.push_str(&format!(
                "| {} | {:.2} | {:.2} | {:.2} |\n",
                year.year_index, year.price, year.revenue, year.profit
            ));
        }
        md.push('\n');
        md
    }

    pub fn format_weather_alerts(alerts: &[WeatherAlert]) -> String {
        let mut md = String::from("## Weather Risk Alerts\n\n");
        if alerts.is_empty() {
            md.push_str("No significant weather risks detected in the next 24 hours.\n\n");
            return md;
        }
        for alert in alerts {
            md.push_str(&format!("- {}\n", alert));
        }
        md.push('\n');
        md
    }

    /// Decision-support view: companions, inputs, GAP and pest controls
    pub fn format_guidance(guidance: &CropGuidance, guidelines: Option<&ManagementGuidelines>) -> String {
        let mut md = String::with_capacity(1024);
        md.push_str(&format!("## {} Guidance\n\n", guidance.crop));

        md.push_str(&format!(
            "**Companions:** {}  \n",
            guidance.companions.join(", ")
        ));
        if let Some(months) = guidance.best_planting_months {
            md.push_str(&format!("**Best Planting Months:** {}  \n", months));
        }
        if let Some(recommendation) = guidance.recommendation {
            md.push_str(&format!("**Recommendation:** {}  \n", recommendation));
        }
        md.push_str(&format!("**Organic Inputs:** {}  \n", guidance.organic_inputs));
        md.push_str(&format!(
            "**Fertilizer:** {} ({})\n\n",
            guidance.input_rate.fertilizer, guidance.input_rate.rate
        ));

        if let Some(tip) = guidance.fertilizer_tip {
            md.push_str(&format!("🌱 Soil tip: {}\n\n", tip));
        }
        if let Some(warning) = guidance.soil_warning {
            md.push_str(&format!("⚠️ {}\n\n", warning));
        }

        if let Some(guidelines) = guidelines {
            md.push_str("### Good Agricultural Practices\n\n");
            for practice in guidelines.practices {
                md.push_str(&format!("- {}\n", practice));
            }
            md.push_str("\n### Pest & Disease Control\n\n");
            md.push_str("| Pest/Disease | Symptoms | Organic Control |\n");
            md.push_str("|--------------|----------|-----------------|\n");
            for pest in guidelines.pests {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    pest.pest, pest.symptoms, pest.control
                ));
            }
            md.push('\n');
        }
        md
    }
}
