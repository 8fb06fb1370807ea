//! HTTP handlers for the prediction front end.

use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use cardiocast_core::RawInputSet;
use cardiocast_pipeline::Outcome;

use crate::page::{self, Banner};
use crate::server::AppState;

/// GET / renders the empty prediction form.
pub async fn form_page() -> Html<String> {
    Html(page::render(None))
}

/// POST /predict runs one submission through the pipeline and re-renders
/// the page with the outcome.
///
/// A rejected submission is a normal page, not an error status; only a
/// classifier failure becomes a 500, and it never reads as a diagnosis.
pub async fn predict(State(state): State<AppState>, Form(raw): Form<RawInputSet>) -> Response {
    match state.pipeline.run(&raw) {
        Ok(Outcome::Label(label)) => {
            Html(page::render(Some(&Banner::Label(label)))).into_response()
        }
        Ok(Outcome::InvalidInput(notice)) => {
            let banner = Banner::Notice(notice.message().to_string());
            Html(page::render(Some(&banner))).into_response()
        }
        Err(err) => {
            error!(%err, "classifier failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(page::render(Some(&Banner::Unavailable))),
            )
                .into_response()
        }
    }
}

/// Liveness payload for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model: String,
}

/// GET /health reports liveness and which model is serving.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        model: state.pipeline.model_name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_payload_serialises_flat() {
        let payload = HealthResponse {
            status: "ok",
            version: "0.1.0",
            model: "heart-lr-v1".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], "0.1.0");
        assert_eq!(json["model"], "heart-lr-v1");
    }
}
