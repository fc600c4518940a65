use crate::config::Config;
use anyhow::Context;
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod context;
mod form;
mod health;
mod predict;

use context::AppState;

pub async fn setup_and_serve(config: &Config, state: AppState) -> anyhow::Result<()> {
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr()))?;

    tracing::info!(
        "house price estimator is up and running with environment {:?} on port {}",
        &config.environment,
        &config.port
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error starting service")
}

fn app(state: AppState) -> Router {
    api_router(state)
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
}

fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(form::router())
        .nest("/api", predict::router())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received, stopping server");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::predict::{ErrorResponse, LocationsResponse, PredictResponse};
    use crate::page::LOAD_FAILED;
    use crate::validation::MISSING_FIELDS;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use house_price_core::{FeatureSchema, LinearRegression, Predictor, BATH_WARNING};
    use http_body_util::BodyExt; // for `collect`
    use tower::ServiceExt;

    fn ready_state() -> AppState {
        let schema = FeatureSchema::new(
            ["total_sqft", "bath", "bhk", "whitefield", "hebbal", "electronic city"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();
        let model = LinearRegression::new(-20.0, vec![0.08, 3.0, 5.0, 12.5, 40.0, -8.0]);
        let predictor: &'static Predictor =
            Box::leak(Box::new(Predictor::new(schema, model).unwrap()));
        AppState::ready(predictor)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::builder()
            .uri("/predict")
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_post(body: &str) -> Request<Body> {
        Request::builder()
            .uri("/api/predict")
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_not_found() {
        let response = app(ready_state())
            .oneshot(
                Request::builder()
                    .uri("/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_lists_sorted_locations() {
        let response = app(ready_state())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        let e = html.find(r#"value="electronic city""#).unwrap();
        let h = html.find(r#"value="hebbal""#).unwrap();
        let w = html.find(r#"value="whitefield""#).unwrap();
        assert!(e < h && h < w);
        assert!(!html.contains(r#"value="bath""#));
    }

    #[tokio::test]
    async fn test_form_submission_renders_estimate() {
        let response = app(ready_state())
            .oneshot(form_post("location=hebbal&total_sqft=1000&bhk=2&bath=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        // -20 + 80 + 6 + 10 + 40
        assert!(html.contains("Estimated Price: ₹116.00 Lakhs"), "{html}");
        assert!(html.contains("₹11600"));
        assert!(html.contains("₹104.40 - ₹127.60 Lakhs"));
        assert!(!html.contains(BATH_WARNING));
    }

    #[tokio::test]
    async fn test_form_submission_warns_on_many_bathrooms() {
        let response = app(ready_state())
            .oneshot(form_post("location=hebbal&total_sqft=1000&bhk=1&bath=4"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains(BATH_WARNING));
    }

    #[tokio::test]
    async fn test_form_submission_with_missing_field() {
        let response = app(ready_state())
            .oneshot(form_post("location=hebbal&total_sqft=&bhk=2&bath=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_string(response).await.contains(MISSING_FIELDS));
    }

    #[tokio::test]
    async fn test_api_locations() {
        let response = app(ready_state())
            .oneshot(
                Request::builder()
                    .uri("/api/locations")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: LocationsResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body.locations, vec!["electronic city", "hebbal", "whitefield"]);
    }

    #[tokio::test]
    async fn test_api_predict_unknown_location_is_accepted() {
        let response = app(ready_state())
            .oneshot(json_post(
                r#"{"location": "Atlantis", "total_sqft": 1000, "bath": 2, "bhk": 2}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: PredictResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body.estimate.price_lakhs, 76.0);
        assert!(!body.estimate.location_recognized);
        assert!(body.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_api_predict_out_of_bounds() {
        let response = app(ready_state())
            .oneshot(json_post(
                r#"{"location": "hebbal", "total_sqft": 50, "bath": 2, "bhk": 2}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body.message.starts_with("Total Area"));
    }

    #[tokio::test]
    async fn test_form_submission_with_fractional_counts() {
        let response = app(ready_state())
            .oneshot(form_post(
                "location=hebbal&total_sqft=1000.5&bhk=2.5&bath=1.25",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let html = body_string(response).await;
        assert!(html.contains("must be a whole number"), "{html}");
        assert!(!html.contains("Estimated Price"));
    }

    #[tokio::test]
    async fn test_api_predict_fractional_bhk() {
        let response = app(ready_state())
            .oneshot(json_post(
                r#"{"location": "hebbal", "total_sqft": 1000, "bath": 2, "bhk": 2.5}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body.message.starts_with("BHK (Bedrooms) must be a whole number"));
    }

    #[tokio::test]
    async fn test_api_predict_missing_field_is_a_json_error() {
        let response = app(ready_state())
            .oneshot(json_post(
                r#"{"location": "hebbal", "total_sqft": 1000, "bath": 2}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body.message.contains("missing field `bhk`"), "{}", body.message);
    }

    #[tokio::test]
    async fn test_api_predict_malformed_body_is_a_json_error() {
        let response = app(ready_state())
            .oneshot(json_post("{ not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(!body.message.is_empty());
    }

    #[tokio::test]
    async fn test_page_escapes_submitted_text() {
        let response = app(ready_state())
            .oneshot(form_post(
                "location=%3Cscript%3Ealert(1)%3C%2Fscript%3E&total_sqft=1000&bhk=2&bath=2",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_unavailable_model_disables_prediction() {
        let state = AppState::unavailable("Artifact not found: artifacts/columns.json");

        let index = app(state.clone())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(index.status(), StatusCode::OK);
        let html = body_string(index).await;
        assert!(html.contains(LOAD_FAILED));
        assert!(!html.contains("<form"));

        let submit = app(state.clone())
            .oneshot(form_post("location=hebbal&total_sqft=1000&bhk=2&bath=2"))
            .await
            .unwrap();
        assert_eq!(submit.status(), StatusCode::SERVICE_UNAVAILABLE);

        let api = app(state)
            .oneshot(json_post(
                r#"{"location": "hebbal", "total_sqft": 1000, "bath": 2, "bhk": 2}"#,
            ))
            .await
            .unwrap();
        assert_eq!(api.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_is_served_alongside_the_app() {
        let response = app(AppState::unavailable("missing"))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
