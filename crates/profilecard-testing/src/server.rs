//! Loopback HTTP server for exercising the real client.
//!
//! An axum router on 127.0.0.1 that answers every request with the next
//! canned response, in order. Once the script runs out it answers 503 with
//! the API's error envelope. The server runs on its own thread and runtime so
//! both sync and async tests can use it, and stops when dropped.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, Version, header};
use axum::response::{IntoResponse, Response};
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Clone)]
struct ServerState {
    responses: Arc<Mutex<VecDeque<CannedResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

pub struct LoopbackServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    _shutdown: oneshot::Sender<()>,
}

impl LoopbackServer {
    pub fn start(responses: Vec<CannedResponse>) -> std::io::Result<Self> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let state = ServerState {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = Arc::clone(&state.requests);
        let app = Router::new().fallback(serve_next).with_state(state);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        thread::spawn(move || {
            runtime.block_on(async move {
                let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                    return;
                };
                let _ = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await;
            });
        });

        Ok(Self {
            addr,
            requests,
            _shutdown: shutdown_tx,
        })
    }

    /// Endpoint URL shaped like the real API path.
    pub fn url(&self) -> String {
        format!("http://{}/api/", self.addr)
    }

    /// Request lines received so far, e.g. `GET /api/ HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve_next(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
    version: Version,
) -> Response {
    state
        .requests
        .lock()
        .unwrap()
        .push(format!("{} {} {:?}", method, uri, version));

    let next = state.responses.lock().unwrap().pop_front();
    let Some(canned) = next else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error":"no canned response left"}"#,
        )
            .into_response();
    };

    let status = StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}
