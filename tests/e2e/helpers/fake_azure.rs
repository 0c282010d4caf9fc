use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

/// What the fake provider answers to every synthesis call
#[derive(Debug, Clone)]
pub enum UpstreamReply {
    Audio(Vec<u8>),
    Error(u16, String),
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

struct FakeState {
    reply: UpstreamReply,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Stand-in for the Azure TTS REST endpoint, bound to a random local port
pub struct FakeAzure {
    pub endpoint: String,
    state: Arc<FakeState>,
}

impl FakeAzure {
    pub async fn start(reply: UpstreamReply) -> Self {
        let state = Arc::new(FakeState {
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/cognitiveservices/v1", post(synthesize))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake Azure listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{}/cognitiveservices/v1", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }
}

/// Endpoint on a port nothing listens on
pub async fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to get local addr");
    drop(listener);
    format!("http://{}/cognitiveservices/v1", addr)
}

async fn synthesize(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let headers = headers
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
        .collect();
    state.requests.lock().push(RecordedRequest { headers, body });

    match &state.reply {
        UpstreamReply::Audio(bytes) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, "audio/mpeg")], bytes.clone()).into_response()
        }
        UpstreamReply::Error(status, message) => {
            let status = StatusCode::from_u16(*status).expect("valid status code");
            (status, message.clone()).into_response()
        }
    }
}
