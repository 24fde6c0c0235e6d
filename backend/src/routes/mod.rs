//! Route definitions for the Water Quality Advisor Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Advisory evaluation and predictions
        .nest("/advisory", advisory_routes())
        // Forecast and rain-risk analysis
        .nest("/weather", weather_routes())
        // Generated advisory text
        .nest("/ai", ai_routes())
}

/// Advisory routes
fn advisory_routes() -> Router<AppState> {
    Router::new()
        .route("/evaluate", post(handlers::evaluate_water_quality))
        .route("/panel", post(handlers::assess_contaminant_panel))
        .route("/disease", post(handlers::predict_disease_risk))
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", get(handlers::get_weather_forecast))
        .route("/rain-risk", get(handlers::get_rain_risk))
        .route("/contamination", post(handlers::assess_contamination))
}

/// AI text-generation routes
fn ai_routes() -> Router<AppState> {
    Router::new().route("/advice", post(handlers::generate_ai_advice))
}
