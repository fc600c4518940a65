use crate::api::context::AppState;
use crate::page::{self, Outcome, PageView};
use crate::validation::PredictForm;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(submit))
}

/// Renders the empty form with default values.
#[tracing::instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = match state.predictor() {
        Some(p) => PageView {
            locations: p.schema().sorted_locations(),
            ..Default::default()
        }
        .with_defaults(),
        None => PageView {
            load_error: state.load_error(),
            ..Default::default()
        },
    };
    Html(page::render(&view).into_string())
}

/// Handles a form submission and renders the page with the outcome.
#[tracing::instrument(skip(state))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> (StatusCode, Html<String>) {
    let Some(predictor) = state.predictor() else {
        let view = PageView {
            load_error: state.load_error(),
            ..Default::default()
        };
        return (StatusCode::SERVICE_UNAVAILABLE, Html(page::render(&view).into_string()));
    };

    let mut view = PageView {
        locations: predictor.schema().sorted_locations(),
        form: form.clone(),
        ..Default::default()
    };

    let input = match form.parse() {
        Ok(input) => input,
        Err(msg) => {
            tracing::debug!(%msg, "rejected form input");
            view.outcome = Some(Outcome::Error(msg));
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(page::render(&view).into_string()));
        }
    };
    view.warnings = input.warnings();

    let status = match predictor.estimate(&input) {
        Ok(estimate) => {
            if !estimate.location_recognized {
                tracing::warn!(location = %input.location, "location not in schema; no location weighting applied");
            }
            tracing::info!(
                location = %input.location,
                price_lakhs = estimate.price_lakhs,
                "estimate served"
            );
            view.outcome = Some(Outcome::Estimate(estimate));
            StatusCode::OK
        }
        Err(e) => {
            tracing::error!(error = %e, "prediction failed");
            view.outcome = Some(Outcome::Error(format!("Error making prediction: {e}")));
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Html(page::render(&view).into_string()))
}
