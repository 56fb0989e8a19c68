//! Generate Sample Crop Calendars
//!
//! Writes a markdown planning report and a schedule CSV for a few sample
//! crops, plus one merged farm calendar.
//! Run with: cargo run --bin generate_sample_calendar -- [OUTPUT_DIR] [YYYY-MM-DD]

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use farmops_planner::catalog::{crop_guidance, lookup_economics, lookup_management_guidelines, EconomicProfile};
use farmops_planner::export::{projection_to_csv, write_schedule_csv};
use farmops_planner::projection::project_profile;
use farmops_planner::schedule::{generate_farm_calendar, generate_reminders, generate_schedule, summarize_calendar};
use farmops_planner::suitability::check_elevation;
use farmops_planner::{MarkdownFormatter, PlannerConfig};

const DEFAULT_OUTPUT_DIR: &str = "reports/calendars";

const SAMPLE_CROPS: &[(&str, &str)] = &[
    ("Tomato", "Short-cycle vegetable with a full task template"),
    ("Cassava", "Long-cycle root crop"),
    ("Coffee", "Highland perennial with an elevation rule"),
];

fn file_stem(crop: &str) -> String {
    crop.to_lowercase().replace(' ', "_")
}

fn crop_report(crop: &str, planting_date: NaiveDate, config: &PlannerConfig) -> Result<String> {
    let mut md = format!("# {} Planting Plan\n\n", crop);

    md.push_str(&MarkdownFormatter::format_calendar_summary(&summarize_calendar(crop, planting_date)));
    md.push_str(&MarkdownFormatter::format_schedule(
        crop,
        &generate_schedule(crop, planting_date, config.task_duration_days),
    ));

    md.push_str("## Field Operation Reminders\n\n");
    for reminder in generate_reminders(crop, planting_date) {
        md.push_str(&format!("- **{}:** {}\n", reminder.task, reminder.start_date));
    }
    md.push('\n');

    md.push_str(&MarkdownFormatter::format_elevation(&check_elevation(crop, 200.0)?));

    let profile = lookup_economics(crop).unwrap_or(EconomicProfile::DEFAULT);
    let years = project_profile(&profile, config.price_growth_pct, config.projection_years)
        .with_context(|| format!("Failed to project economics for {}", crop))?;
    md.push_str(&MarkdownFormatter::format_projection(crop, &years));

    md.push_str(&MarkdownFormatter::format_guidance(
        &crop_guidance(crop, None),
        lookup_management_guidelines(crop),
    ));

    Ok(md)
}

fn write_crop(crop: &str, planting_date: NaiveDate, config: &PlannerConfig, output_dir: &Path) -> Result<()> {
    let stem = file_stem(crop);

    let report = crop_report(crop, planting_date, config)?;
    let md_path = output_dir.join(format!("{}.md", stem));
    fs::write(&md_path, report).with_context(|| format!("Failed to write {}", md_path.display()))?;

    let csv_path = output_dir.join(format!("{}_schedule.csv", stem));
    write_schedule_csv(
        &generate_schedule(crop, planting_date, config.task_duration_days),
        &csv_path,
    )
    .with_context(|| format!("Failed to write {}", csv_path.display()))?;

    let profile = lookup_economics(crop).unwrap_or(EconomicProfile::DEFAULT);
    let years = project_profile(&profile, config.price_growth_pct, config.projection_years)?;
    let projection_path = output_dir.join(format!("{}_projection.csv", stem));
    fs::write(&projection_path, projection_to_csv(&years)?)
        .with_context(|| format!("Failed to write {}", projection_path.display()))?;

    tracing::info!("  ✓ {} -> {}", crop, md_path.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farmops_planner=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()));
    let planting_date = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid planting date '{}', expected YYYY-MM-DD", raw))?,
        None => chrono::Local::now().date_naive(),
    };

    let config = PlannerConfig::from_env();

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    tracing::info!("Generating sample calendars for {}", planting_date);
    for (crop, description) in SAMPLE_CROPS {
        tracing::info!("{} ({})", crop, description);
        write_crop(crop, planting_date, &config, &output_dir)?;
    }

    let crops: Vec<&str> = SAMPLE_CROPS.iter().map(|(crop, _)| *crop).collect();
    let calendar = generate_farm_calendar(&crops, planting_date, config.task_duration_days);
    let calendar_path = output_dir.join("farm_calendar.md");
    fs::write(&calendar_path, MarkdownFormatter::format_farm_calendar(&calendar))
        .with_context(|| format!("Failed to write {}", calendar_path.display()))?;

    tracing::info!("Done: {} tasks in farm calendar", calendar.tasks.len());
    Ok(())
}
