use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};

use crate::classify::Classifier;
use crate::source::NoteSource;

pub mod error;
pub mod notes;

pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Server {
    /// Binds on an ephemeral local port and starts serving.
    pub async fn new(source: Arc<dyn NoteSource>) -> Result<Self, String> {
        Self::bind("127.0.0.1:0", source).await
    }

    pub async fn bind(addr: &str, source: Arc<dyn NoteSource>) -> Result<Self, String> {
        let state = Arc::new(ServerState {
            source,
            classifier: Classifier::default(),
        });
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        let app = Router::new()
            .route("/health", get(health))
            .route("/api/notes", get(notes::list))
            .route("/api/assess", get(notes::assess))
            .route("/api/export", post(notes::export))
            .with_state(state)
            .layer(cors);
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|error| error.to_string())?;
        let addr = listener.local_addr().map_err(|error| error.to_string())?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        tracing::info!("noteport server listening on {addr}");
        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(&mut self) -> Result<(), String> {
        if let Some(sender) = self.shutdown.take() {
            sender
                .send(())
                .map_err(|_| "failed to send server shutdown signal".to_string())
        } else {
            Ok(())
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

async fn health() -> &'static str {
    "ok"
}

pub(crate) struct ServerState {
    pub(crate) source: Arc<dyn NoteSource>,
    pub(crate) classifier: Classifier,
}
