//! Fake upstream stats server and listener helpers shared by integration tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, response::IntoResponse, Router};
use tokio::net::TcpListener;

pub const TWO_BUSY_ONE_IDLE: &str =
    r#"{"workers":[{"status":"busy"},{"status":"busy"},{"status":"idle"}]}"#;
pub const ONE_BUSY: &str = r#"{"workers":[{"status":"busy"}]}"#;

/// Canned response the fake stats server returns; swap it between ticks.
#[derive(Clone)]
pub struct FakeUpstream {
    reply: Arc<Mutex<(StatusCode, String)>>,
    pub addr: SocketAddr,
}

impl FakeUpstream {
    pub async fn start(body: &str) -> Self {
        let reply = Arc::new(Mutex::new((StatusCode::OK, body.to_string())));
        let app = Router::new()
            .fallback(fake_stats)
            .with_state(Arc::clone(&reply));
        let addr = spawn(app).await;
        Self { reply, addr }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn reply_with(&self, status: StatusCode, body: &str) {
        *self.reply.lock().unwrap() = (status, body.to_string());
    }
}

async fn fake_stats(State(reply): State<Arc<Mutex<(StatusCode, String)>>>) -> impl IntoResponse {
    let (status, body) = reply.lock().unwrap().clone();
    (status, body)
}

/// Serve `app` on an ephemeral localhost port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// A localhost address with nothing listening on it.
pub async fn dead_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// In-memory log sink for a `tracing_subscriber::fmt` subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }

    /// Install as the thread default; logs are captured while the guard lives.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
