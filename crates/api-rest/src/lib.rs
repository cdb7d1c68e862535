//! # API REST
//!
//! REST API implementation for the cardiovascular risk service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON wire bodies, CORS, error mapping)
//!
//! Core inference logic lives in `cardio-core`.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use cardio_core::{FieldViolation, InferenceService, ObservationInput, PredictError};

/// Banner returned by the root endpoint.
pub const SERVICE_BANNER: &str = "Cardiovascular Disease Prediction API is running.";

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    inference: InferenceService,
}

impl AppState {
    pub fn new(inference: InferenceService) -> Self {
        Self { inference }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cardiovascular Disease Prediction API",
        description = "API for predicting cardiovascular disease risk from eleven clinical measurements",
        version = "1.0.0"
    ),
    paths(home, predict),
    components(schemas(
        HomeRes,
        PredictionRequest,
        PredictionResponse,
        ValidationBody,
        FieldViolationBody,
        ErrorBody
    ))
)]
struct ApiDoc;

/// Service running banner.
#[derive(Debug, Serialize, ToSchema)]
pub struct HomeRes {
    pub message: String,
}

/// One inference request: eleven clinical measurements.
///
/// Field names match the training dataset's column names exactly.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PredictionRequest {
    /// Age in years (20-80).
    pub age: f64,
    /// Gender (1: female, 2: male, dataset convention).
    pub gender: i64,
    /// Height in cm (50-250).
    pub height: f64,
    /// Weight in kg (10-250).
    pub weight: f64,
    /// Systolic blood pressure (50-250).
    pub ap_hi: f64,
    /// Diastolic blood pressure (30-150).
    pub ap_lo: f64,
    /// Cholesterol (1: normal, 2: above normal, 3: well above normal).
    pub cholesterol: i64,
    /// Glucose (1: normal, 2: above normal, 3: well above normal).
    pub gluc: i64,
    /// Smoking (0: no, 1: yes).
    pub smoke: i64,
    /// Alcohol intake (0: no, 1: yes).
    pub alco: i64,
    /// Physical activity (0: no, 1: yes).
    pub active: i64,
}

impl From<PredictionRequest> for ObservationInput {
    fn from(req: PredictionRequest) -> Self {
        Self {
            age: req.age,
            gender: req.gender,
            height: req.height,
            weight: req.weight,
            ap_hi: req.ap_hi,
            ap_lo: req.ap_lo,
            cholesterol: req.cholesterol,
            gluc: req.gluc,
            smoke: req.smoke,
            alco: req.alco,
            active: req.active,
        }
    }
}

/// Successful inference response.
#[derive(Debug, Serialize, ToSchema)]
pub struct PredictionResponse {
    /// Binary classification (0 or 1).
    pub prediction: u8,
    /// Positive-class probability, or the classification as a real number when the model
    /// exposes no probability output.
    pub probability: f64,
    /// "High Risk" or "Low Risk".
    pub risk_label: String,
}

/// One out-of-range field in a rejected request.
#[derive(Debug, Serialize, ToSchema)]
pub struct FieldViolationBody {
    pub field: String,
    pub min: f64,
    pub max: f64,
    pub given: f64,
    pub message: String,
}

impl From<&FieldViolation> for FieldViolationBody {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            field: violation.field.to_string(),
            min: violation.min,
            max: violation.max,
            given: violation.given,
            message: violation.to_string(),
        }
    }
}

/// Validation failure envelope with per-field detail.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationBody {
    pub detail: Vec<FieldViolationBody>,
}

/// Error envelope for service failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

/// REST-boundary error: maps pipeline failures onto wire status codes and bodies.
#[derive(Debug)]
pub enum ApiError {
    Validation(cardio_core::ValidationError),
    ModelUnavailable,
    Inference(String),
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Validation(validation) => ApiError::Validation(validation),
            PredictError::ModelUnavailable => ApiError::ModelUnavailable,
            PredictError::Inference(message) => ApiError::Inference(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                let detail = err.violations.iter().map(FieldViolationBody::from).collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationBody { detail }),
                )
                    .into_response()
            }
            ApiError::ModelUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    detail: "Model not loaded".into(),
                }),
            )
                .into_response(),
            ApiError::Inference(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    detail: format!("Prediction error: {message}"),
                }),
            )
                .into_response(),
        }
    }
}

/// Builds the REST router with routes, Swagger documentation and CORS applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/predict", post(predict))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service running banner", body = HomeRes)
    )
)]
/// Service banner endpoint
///
/// Responds even when the model artifact failed to load, so deployments can
/// distinguish a dead process from a degraded one.
async fn home() -> Json<HomeRes> {
    Json(HomeRes {
        message: SERVICE_BANNER.to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictionRequest,
    responses(
        (status = 200, description = "Risk classification for the observation", body = PredictionResponse),
        (status = 422, description = "One or more fields outside their declared range", body = ValidationBody),
        (status = 500, description = "Model not loaded, or the prediction itself failed", body = ErrorBody)
    )
)]
/// Estimate cardiovascular disease risk for one observation
///
/// Validates the eleven clinical fields against their declared ranges, assembles the
/// feature vector in training order and invokes the loaded classifier.
///
/// # Returns
/// * `Ok(Json<PredictionResponse>)` - Classification, probability and risk label
/// * `Err(ApiError)` - Validation detail (422) or service failure (500)
async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    match state.inference.predict(req.into()) {
        Ok(result) => Ok(Json(PredictionResponse {
            prediction: result.classification,
            probability: result.risk_probability,
            risk_label: result.risk_label.to_string(),
        })),
        Err(err) => {
            if !matches!(err, PredictError::Validation(_)) {
                tracing::error!("prediction failed: {err}");
            }
            Err(ApiError::from(err))
        }
    }
}
