use anyhow::Result;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::insight::{generate_insight, Recommendation, Stats};

use super::{log_requests, state::ServerState, RequestsLoggingLevel, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct InsightBody {
    pub stats: Stats,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
    };
    Json(stats)
}

/// Composes an insight for the posted stats and recommendations.
/// Responds 204 when there is not enough data to say anything.
async fn post_insight(Json(body): Json<InsightBody>) -> Response {
    debug!(
        "post_insight() called with {} tracks, {} recommendations",
        body.stats.tracks.len(),
        body.recommendations.len()
    );
    match generate_insight(&body.stats, &body.recommendations) {
        Some(insight) => Json(insight).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub fn make_app(config: ServerConfig) -> Router {
    let state = ServerState::new(config);

    Router::new()
        .route("/", get(home))
        .route("/v1/insight", post(post_insight))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(requests_logging_level: RequestsLoggingLevel, port: u16) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
    };
    let app = make_app(config);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
