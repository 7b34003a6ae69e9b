//! In-process stand-in for The Color API, used by tests.

use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockReply {
    Colors(Vec<String>),
    Status(u16),
    Body(&'static str),
}

impl MockReply {
    pub fn colors(hexes: &[&str]) -> Self {
        MockReply::Colors(hexes.iter().map(|h| h.to_string()).collect())
    }
}

struct MockState {
    reply: MockReply,
    queries: Mutex<Vec<String>>,
}

pub struct MockColorApi {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockColorApi {
    pub async fn start(reply: MockReply) -> Self {
        let state = Arc::new(MockState {
            reply,
            queries: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/scheme", get(scheme))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Base URL of a port nothing is listening on.
    pub async fn unreachable_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    /// Raw query strings received so far, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.state.queries.lock().unwrap().clone()
    }
}

async fn scheme(State(state): State<Arc<MockState>>, RawQuery(query): RawQuery) -> Response {
    state.queries.lock().unwrap().push(query.unwrap_or_default());

    match &state.reply {
        MockReply::Colors(hexes) => {
            let colors: Vec<_> = hexes
                .iter()
                .map(|h| json!({ "hex": { "value": h, "clean": h.trim_start_matches('#') } }))
                .collect();
            Json(json!({ "mode": "triad", "colors": colors })).into_response()
        }
        MockReply::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "upstream failure").into_response()
        }
        MockReply::Body(body) => {
            ([(header::CONTENT_TYPE, "application/json")], *body).into_response()
        }
    }
}
