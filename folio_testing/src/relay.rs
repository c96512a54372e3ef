use std::{net::IpAddr, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use chrono::{DateTime, Utc};
use folio_models::contact::ContactMessage;
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;

    info!("Starting relay testing server on {host}:{port}");
    info!("Relay endpoint: http://{host}:{port}/f/{{form_id}}");
    info!("Recorded submissions: http://{host}:{port}/f/{{form_id}}/submissions");
    info!(
        "Form ids named \"deny-STATUS\" are answered with that HTTP status; \
         \"sleep-MILLIS\" delays the response"
    );

    serve(listener).await
}

/// Serves the relay on an already-bound listener. Integration tests bind to
/// port 0 and spawn this.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    let router = Router::new()
        .route("/f/:form_id", routing::post(submit))
        .route("/f/:form_id/submissions", routing::get(list_submissions))
        .with_state(RelayState::default());

    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

#[derive(Debug, Clone, Default)]
struct RelayState {
    submissions: Arc<RwLock<Vec<ReceivedSubmission>>>,
}

#[derive(Debug, Clone, Serialize)]
struct ReceivedSubmission {
    id: Uuid,
    form_id: String,
    message: ContactMessage,
    received_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct RelayAccepted {
    ok: bool,
}

async fn submit(
    State(state): State<RelayState>,
    Path(form_id): Path<String>,
    Json(message): Json<ContactMessage>,
) -> Response {
    if let Some(status) = form_id
        .strip_prefix("deny-")
        .and_then(|s| s.parse::<u16>().ok())
    {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return status.into_response();
    }

    if let Some(millis) = form_id
        .strip_prefix("sleep-")
        .and_then(|s| s.parse::<u64>().ok())
    {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }

    state.submissions.write().await.push(ReceivedSubmission {
        id: Uuid::new_v4(),
        form_id,
        message,
        received_at: Utc::now(),
    });

    (StatusCode::OK, Json(RelayAccepted { ok: true })).into_response()
}

async fn list_submissions(
    State(state): State<RelayState>,
    Path(form_id): Path<String>,
) -> Json<Vec<ReceivedSubmission>> {
    let submissions = state.submissions.read().await;
    Json(
        submissions
            .iter()
            .filter(|s| s.form_id == form_id)
            .cloned()
            .collect(),
    )
}
