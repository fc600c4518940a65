use crate::api::context::AppState;
use crate::validation;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use house_price_core::{Estimate, PropertyInput};
use serde::{Deserialize, Serialize};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/locations", get(get_locations))
        .route("/predict", post(post_predict))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub estimate: Estimate,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// Artifacts failed to load at startup.
    Unavailable(String),
    InvalidInput(String),
    Prediction(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unavailable(m) => (StatusCode::SERVICE_UNAVAILABLE, m),
            ApiError::InvalidInput(m) => (StatusCode::UNPROCESSABLE_ENTITY, m),
            ApiError::Prediction(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(ErrorResponse { message })).into_response()
    }
}

fn unavailable(state: &AppState) -> ApiError {
    ApiError::Unavailable(format!(
        "model unavailable: {}",
        state.load_error().unwrap_or("not loaded")
    ))
}

/// Known locations, sorted alphabetically.
#[tracing::instrument(skip(state))]
pub async fn get_locations(
    State(state): State<AppState>,
) -> Result<Json<LocationsResponse>, ApiError> {
    let predictor = state.predictor().ok_or_else(|| unavailable(&state))?;
    let locations = predictor
        .schema()
        .sorted_locations()
        .into_iter()
        .map(str::to_string)
        .collect();
    Ok(Json(LocationsResponse { locations }))
}

#[tracing::instrument(skip(state))]
pub async fn post_predict(
    State(state): State<AppState>,
    payload: Result<Json<PropertyInput>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let predictor = state.predictor().ok_or_else(|| unavailable(&state))?;
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected request body");
        ApiError::InvalidInput(rejection.body_text())
    })?;
    validation::check_input(&input).map_err(ApiError::InvalidInput)?;

    let estimate = predictor.estimate(&input).map_err(|e| {
        tracing::error!(error = %e, "prediction failed");
        ApiError::Prediction(format!("Error making prediction: {e}"))
    })?;

    Ok(Json(PredictResponse {
        estimate,
        warnings: input.warnings().into_iter().map(String::from).collect(),
    }))
}
