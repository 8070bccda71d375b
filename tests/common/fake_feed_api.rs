//! Fake Flickr feed server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1, serving a configurable body and status from the feed path. The
//! adapter under test takes a configurable URL so it can be pointed here.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_feed_api::FakeFeedApi;
//!
//! let api = FakeFeedApi::start().await.unwrap();
//! api.set_body(common::fixtures::FEED_JSON).await;
//!
//! // Point your adapter at api.feed_url()
//! let url = api.feed_url();
//! # });
//! ```

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
struct ApiState {
    status: u16,
    body: String,
}

/// Handle to the running fake feed server.
pub struct FakeFeedApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeFeedApi {
    /// Start the fake feed server on a random port, serving the well-formed
    /// fixture body with status 200. Returns once the server is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState {
            status: 200,
            body: crate::common::fixtures::FEED_JSON.to_string(),
        }));

        let app = Router::new()
            .route("/services/feeds/photos_public.gne", get(serve_feed))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Full feed URL, query string included, as an adapter would be
    /// configured with.
    pub fn feed_url(&self) -> String {
        format!(
            "http://{}/services/feeds/photos_public.gne?format=json&nojsoncallback=?",
            self.addr
        )
    }

    /// Replace the served body.
    pub async fn set_body(&self, body: &str) {
        self.state.lock().await.body = body.to_string();
    }

    /// Replace the served status code.
    pub async fn set_status(&self, status: u16) {
        self.state.lock().await.status = status;
    }
}

// ---------------------------------------------------------------------------
// Route handler
// ---------------------------------------------------------------------------

async fn serve_feed(State(state): State<Arc<Mutex<ApiState>>>) -> impl IntoResponse {
    let state = state.lock().await;
    let status = axum::http::StatusCode::from_u16(state.status)
        .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    (status, state.body.clone())
}
