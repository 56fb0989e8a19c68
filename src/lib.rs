//! FarmOps Planner
//!
//! Farm-management planning core: deterministic crop task calendars, soil
//! and elevation suitability checks, and simple financial projections.
//!
//! Module layout:
//! - `catalog/`: static crop reference tables (tasks, maturity, soil, economics, guidance)
//! - `schedule/`: task schedule generator, reminders, multi-crop farm calendar
//! - `suitability/`: soil and elevation evaluation
//! - `projection`: compounded price / revenue / profit per year
//! - `weather`: forecast risk alerts
//! - `session`: farm session and activity logbook
//! - `export/`, `formatters/`: CSV, chart model, markdown and JSON rendering
//!
//! Every planning function is pure and may be called from any thread.

pub mod error;
pub mod config;
pub mod catalog;
pub mod schedule;
pub mod suitability;
pub mod projection;
pub mod weather;
pub mod diagnosis;
pub mod session;
pub mod export;
pub mod formatters;

// Axum API server (feature-gated)
#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{PlannerError, Result};
pub use config::{PlannerConfig, ServerConfig};
pub use catalog::{
    lookup_economics, lookup_maturity, lookup_soil_profile, lookup_tasks, EconomicProfile,
    SoilReferenceProfile, Texture,
};
pub use schedule::{
    compute_harvest_date, generate_farm_calendar, generate_reminders, generate_schedule,
    FarmCalendar, ScheduledTask,
};
pub use suitability::{check_elevation, evaluate_soil, SoilEvaluation, SuitabilityReport};
pub use projection::{project, YearProjection};
pub use weather::{analyze_forecast, WeatherAlert};
pub use formatters::{JsonFormatter, MarkdownFormatter};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
