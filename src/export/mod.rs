//! Schedule & Projection Export
//!
//! - `csv.rs` - tables through a polars `DataFrame` and `CsvWriter`
//! - `gantt.rs` - bar model for timeline charts (rendering is external)

pub mod csv;
pub mod gantt;

pub use self::csv::{
    projection_frame, projection_to_csv, schedule_frame, schedule_to_csv, write_schedule_csv,
};
pub use gantt::{gantt_bars, GanttBar};
