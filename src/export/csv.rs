use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::projection::YearProjection;
use crate::schedule::ScheduledTask;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Schedule as a `Crop, Task, Start, End` table (dates as `YYYY-MM-DD`)
///
/// Reminder-mode tasks have a null `End`.
pub fn schedule_frame(tasks: &[ScheduledTask]) -> PolarsResult<DataFrame> {
    let crops: Vec<&str> = tasks.iter().map(|t| t.crop.as_str()).collect();
    let labels: Vec<&str> = tasks.iter().map(|t| t.task.as_str()).collect();
    let starts: Vec<String> = tasks
        .iter()
        .map(|t| t.start_date.format(DATE_FORMAT).to_string())
        .collect();
    let ends: Vec<Option<String>> = tasks
        .iter()
        .map(|t| t.end_date.map(|d| d.format(DATE_FORMAT).to_string()))
        .collect();

    df! {
        "Crop" => crops,
        "Task" => labels,
        "Start" => starts,
        "End" => ends,
    }
}

/// Projection as a `Year, Price, Revenue, Profit` table
pub fn projection_frame(years: &[YearProjection]) -> PolarsResult<DataFrame> {
    df! {
        "Year" => years.iter().map(|y| y.year_index).collect::<Vec<u32>>(),
        "Price" => years.iter().map(|y| y.price).collect::<Vec<f64>>(),
        "Revenue" => years.iter().map(|y| y.revenue).collect::<Vec<f64>>(),
        "Profit" => years.iter().map(|y| y.profit).collect::<Vec<f64>>(),
    }
}

fn frame_to_csv(mut df: DataFrame) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    CsvWriter::new(&mut buf)
        .include_header(true)
        .finish(&mut df)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Schedule rendered as CSV text, header `Crop,Task,Start,End`
pub fn schedule_to_csv(tasks: &[ScheduledTask]) -> Result<String> {
    frame_to_csv(schedule_frame(tasks)?)
}

pub fn projection_to_csv(years: &[YearProjection]) -> Result<String> {
    frame_to_csv(projection_frame(years)?)
}

/// Write a schedule CSV file
pub fn write_schedule_csv(tasks: &[ScheduledTask], path: &Path) -> Result<()> {
    let mut df = schedule_frame(tasks)?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    Ok(())
}
