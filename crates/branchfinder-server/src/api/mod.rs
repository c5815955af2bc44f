mod sample;

use std::path::Path;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderName, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use branchfinder_core::Branch;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::middleware::{request_id, RequestId};

pub(crate) use sample::sample_branches;

/// Dataset loaded once at startup, serialized to JSON in the nested wire shape.
#[derive(Clone)]
pub struct AppState {
    pub payload: Bytes,
    pub branch_count: usize,
}

impl AppState {
    pub fn from_branches(branches: &[Branch]) -> Self {
        Self {
            payload: Bytes::from(branchfinder_loader::canonical_payload(branches).to_string()),
            branch_count: branches.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    branches: usize,
}

impl ResponseMeta {
    fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-request-id"),
        ])
}

/// Build the router. Paths that match no route fall through to `static_dir`
/// when one is given. `/` serves `static_dir/index.html` if it exists at
/// startup and the liveness text otherwise.
pub fn build_app(state: AppState, static_dir: Option<&Path>) -> Router {
    let index = static_dir
        .map(|dir| dir.join("index.html"))
        .filter(|path| path.is_file());

    let mut router = match index {
        Some(index) => Router::new().route_service("/", ServeFile::new(index)),
        None => Router::new().route("/", get(root)),
    }
    .route("/branchLocator.json", get(branch_locator))
    .route("/api/v1/health", get(health))
    .route("/api/{*path}", get(api_not_found));

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn root() -> &'static str {
    "Branch data server is running! Try /branchLocator.json"
}

async fn branch_locator(State(state): State<AppState>) -> impl IntoResponse {
    tracing::debug!(branches = state.branch_count, "serving branch dataset");
    ([(header::CONTENT_TYPE, "application/json")], state.payload)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            branches: state.branch_count,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

async fn api_not_found(Extension(req_id): Extension<RequestId>, uri: Uri) -> ApiError {
    ApiError::new(req_id.0, "not_found", format!("no API route for {}", uri.path()))
}
