//! Axum API Server
//!
//! JSON endpoints over the planning core. Handlers only parse requests and
//! shape responses; all planning logic lives in the library modules.
//! Multi-crop calendars run on the blocking pool since they fan out over rayon.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::catalog::{
    self, crop_guidance, lookup_economics, lookup_management_guidelines, CatalogKind,
    EconomicProfile, SoilType, Texture,
};
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::export::schedule_to_csv;
use crate::projection::{base_year_summary, project_profile};
use crate::schedule::{
    generate_farm_calendar, generate_schedule, summarize_calendar, CropCalendarSummary, FarmCalendar,
};
use crate::suitability::{check_elevation, evaluate_soil, ElevationAssessment, SoilEvaluation};
use crate::weather::{analyze_forecast, Forecast};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    pub fn new(config: PlannerConfig) -> Self {
        tracing::info!("Building crop catalog indexes...");
        catalog::warm_up();
        Self { config: Arc::new(config) }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Catalog
        .route("/api/crops", get(list_crops))
        .route("/api/economics/:crop", get(get_economics))
        .route("/api/guidance/:crop", get(get_guidance))

        // Schedules
        .route("/api/schedule/:crop", get(get_schedule))
        .route("/api/schedule/:crop/csv", get(get_schedule_csv))
        .route("/api/harvest/:crop", get(get_harvest))
        .route("/api/calendar", post(build_calendar))

        // Suitability
        .route("/api/soil/evaluate", post(evaluate_soil_handler))
        .route("/api/elevation/:crop", get(get_elevation))

        // Finance and weather
        .route("/api/projection", post(run_projection))
        .route("/api/weather/alerts", post(weather_alerts))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_crops() -> Json<serde_json::Value> {
    Json(json!({
        "tasks": catalog::crop_names(CatalogKind::Tasks),
        "maturity": catalog::crop_names(CatalogKind::Maturity),
        "soil": catalog::crop_names(CatalogKind::Soil),
        "economics": catalog::crop_names(CatalogKind::Economics),
        "guidelines": catalog::crop_names(CatalogKind::Guidelines),
    }))
}

async fn get_economics(Path(crop): Path<String>) -> Result<Json<EconomicProfile>, AppError> {
    lookup_economics(&crop)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No economic data for {}", crop)))
}

async fn get_guidance(
    Path(crop): Path<String>,
    Query(query): Query<GuidanceQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let soil = query
        .soil_type
        .as_deref()
        .map(str::parse::<SoilType>)
        .transpose()?;

    Ok(Json(json!({
        "guidance": crop_guidance(&crop, soil),
        "guidelines": lookup_management_guidelines(&crop),
    })))
}

async fn get_schedule(
    State(state): State<AppState>,
    Path(crop): Path<String>,
    Query(query): Query<ScheduleQuery>,
) -> Json<serde_json::Value> {
    let duration = query.task_duration_days.unwrap_or(state.config.task_duration_days);
    let tasks = generate_schedule(&crop, query.planting_date, duration);

    Json(json!({
        "crop": crop,
        "planting_date": query.planting_date,
        "template_found": catalog::lookup_tasks(&crop).is_some(),
        "tasks": tasks,
    }))
}

async fn get_schedule_csv(
    State(state): State<AppState>,
    Path(crop): Path<String>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Response, AppError> {
    let duration = query.task_duration_days.unwrap_or(state.config.task_duration_days);
    let csv = schedule_to_csv(&generate_schedule(&crop, query.planting_date, duration))?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}_schedule.csv\"", crop.replace(' ', "_")),
        ),
    ];
    Ok((headers, csv).into_response())
}

async fn get_harvest(
    Path(crop): Path<String>,
    Query(query): Query<HarvestQuery>,
) -> Json<CropCalendarSummary> {
    Json(summarize_calendar(&crop, query.planting_date))
}

async fn build_calendar(
    State(state): State<AppState>,
    Json(payload): Json<CalendarRequest>,
) -> Result<Json<FarmCalendar>, AppError> {
    let duration = payload.task_duration_days.unwrap_or(state.config.task_duration_days);

    tracing::info!("Building farm calendar for {} crops", payload.crops.len());

    // CPU-bound work: run in blocking thread pool
    let calendar = tokio::task::spawn_blocking(move || {
        generate_farm_calendar(&payload.crops, payload.planting_date, duration)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(calendar))
}

async fn evaluate_soil_handler(
    Json(payload): Json<SoilRequest>,
) -> Result<Json<SoilEvaluation>, AppError> {
    let texture: Texture = payload.texture.parse()?;
    let evaluation = evaluate_soil(
        &payload.crop,
        payload.ph,
        payload.organic_matter_pct,
        payload.moisture_pct,
        texture,
    )?;
    Ok(Json(evaluation))
}

async fn get_elevation(
    Path(crop): Path<String>,
    Query(query): Query<ElevationQuery>,
) -> Result<Json<ElevationAssessment>, AppError> {
    Ok(Json(check_elevation(&crop, query.elevation_m)?))
}

async fn run_projection(
    State(state): State<AppState>,
    Json(payload): Json<ProjectionRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let catalog_entry = lookup_economics(&payload.crop);
    let profile = catalog_entry.unwrap_or(EconomicProfile::DEFAULT).with_overrides(
        payload.yield_tons_per_ha,
        payload.cost_per_ha,
        payload.price_per_ton,
    );
    let growth = payload.growth_pct.unwrap_or(state.config.price_growth_pct);
    let years = payload.years.unwrap_or(state.config.projection_years);

    let base_year = base_year_summary(&profile)?;
    let projections = project_profile(&profile, growth, years)?;

    Ok(Json(json!({
        "crop": payload.crop,
        "catalog_entry": catalog_entry.is_some(),
        "profile": profile,
        "growth_pct": growth,
        "base_year": base_year,
        "years": projections,
    })))
}

async fn weather_alerts(Json(forecast): Json<Forecast>) -> Json<serde_json::Value> {
    let alerts = analyze_forecast(&forecast.list);
    let labels: Vec<String> = alerts.iter().map(|a| a.to_string()).collect();

    Json(json!({
        "entries_examined": forecast.list.len().min(crate::weather::FORECAST_WINDOW),
        "alerts": alerts,
        "labels": labels,
    }))
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct ScheduleQuery {
    planting_date: NaiveDate,
    task_duration_days: Option<u32>,
}

#[derive(Deserialize, Debug)]
struct HarvestQuery {
    planting_date: NaiveDate,
}

#[derive(Deserialize, Debug)]
struct ElevationQuery {
    elevation_m: f64,
}

#[derive(Deserialize, Debug)]
struct GuidanceQuery {
    soil_type: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CalendarRequest {
    crops: Vec<String>,
    planting_date: NaiveDate,
    task_duration_days: Option<u32>,
}

#[derive(Deserialize, Debug)]
struct SoilRequest {
    crop: String,
    ph: f64,
    organic_matter_pct: f64,
    moisture_pct: u32,
    texture: String,
}

#[derive(Deserialize, Debug)]
struct ProjectionRequest {
    crop: String,
    yield_tons_per_ha: Option<f64>,
    cost_per_ha: Option<f64>,
    price_per_ton: Option<f64>,
    growth_pct: Option<f64>,
    years: Option<u32>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<PlannerError> for AppError {
    fn from(err: PlannerError) -> Self {
        match err {
            PlannerError::Export(_) | PlannerError::Io(_) => AppError::Internal(err.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
