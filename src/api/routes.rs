use axum::{
    routing::{get, post},
    Router,
    extract::{Form, Json, State},
    response::{IntoResponse, Response},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use chrono::Utc;

use crate::api::models::{HealthResponse, SummarizeRequest, SummarizeResponse};
use crate::api::response;
use crate::form::{self, FormState};
use crate::view::render_page;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(form_handler))
        .route("/api/summarize", post(summarize_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn index_handler() -> Response {
    render_page(&FormState::new())
}

/// Classic form post: run one submit cycle and render whatever state it ends in.
async fn form_handler(
    State(state): State<AppState>,
    Form(req): Form<SummarizeRequest>,
) -> Response {
    let mut form_state = FormState::new();
    form_state.set_url(req.url);

    // Failures are already recorded in the form state and rendered from there.
    let _ = form::submit(&mut form_state, state.summarizer.as_ref()).await;

    render_page(&form_state)
}

async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Response {
    let mut form_state = FormState::new();
    form_state.set_url(req.url);

    match form::submit(&mut form_state, state.summarizer.as_ref()).await {
        Ok(_) => response::success(SummarizeResponse {
            url: form_state.url.trim().to_string(),
            summary: form_state.summary,
            summarized_at: Utc::now(),
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
