use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    async_trait,
    extract::{FromRequest, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use vidgrade_core::{extract_video_id, Analysis, AnalysisRequest, VideoAnalyzer};

pub type AppState = Arc<VideoAnalyzer>;

/// Fields of an analyze request. A missing `videoUrl` is reported as an
/// invalid URL rather than a decoding failure.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeBody {
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub subject: String,
}

/// Analyze body decoded from either a urlencoded form or JSON, chosen by
/// `Content-Type`.
pub struct AnalyzeInput(pub AnalyzeBody);

#[async_trait]
impl<S> FromRequest<S> for AnalyzeInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(body) = Form::<AnalyzeBody>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    warn!(error = %rejection.body_text(), "rejecting form body");
                    ApiError::new(rejection.status(), INVALID_BODY)
                })?;
            Ok(Self(body))
        } else {
            let Json(body) = Json::<AnalyzeBody>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    warn!(error = %rejection.body_text(), "rejecting JSON body");
                    ApiError::new(rejection.status(), INVALID_BODY)
                })?;
            Ok(Self(body))
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: Analysis,
    pub subject: String,
    pub video_url: String,
}

const INVALID_URL: &str = "Invalid YouTube URL";
const INVALID_BODY: &str = "Invalid request body";

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Boundary failure rendered as `{"error": ...}` with its status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn start_server(addr: SocketAddr, analyzer: AppState) -> anyhow::Result<()> {
    let app = router(analyzer);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(addr = %listener.local_addr()?, "vidgrade server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn analyze(
    State(analyzer): State<AppState>,
    AnalyzeInput(body): AnalyzeInput,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if extract_video_id(&body.video_url).is_none() {
        warn!(video_url = %body.video_url, "rejecting unrecognized video URL");
        return Err(ApiError::new(StatusCode::BAD_REQUEST, INVALID_URL));
    }

    let request = AnalysisRequest::new(body.video_url, body.subject);
    let analysis = analyzer.analyze_tagged(&request).await;

    Ok(Json(AnalyzeResponse {
        analysis,
        subject: request.subject,
        video_url: request.video_reference,
    }))
}
