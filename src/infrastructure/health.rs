//! # Healthcheck Server
//!
//! Answers every request on every path with a fixed plain-text body so that
//! hosting platforms can tell the process is alive. Independent of the chat side.

use anyhow::Result;
use axum::Router;
use axum::http::header;
use axum::response::IntoResponse;
use std::net::SocketAddr;
use tokio::sync::oneshot;

pub const BODY: &str = "✅ Bot is running!\n";

pub fn router() -> Router {
    Router::new().fallback(alive)
}

async fn alive() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], BODY)
}

/// Handle to the spawned server task.
pub struct HealthHandle {
    pub addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    join: tokio::task::JoinHandle<Result<()>>,
}

impl HealthHandle {
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        match self.join.await {
            Ok(Err(e)) => tracing::error!("Healthcheck server failed: {e}"),
            Err(e) => tracing::error!("Healthcheck task panicked: {e}"),
            Ok(Ok(())) => {}
        }
    }
}

pub async fn start(port: u16) -> Result<HealthHandle> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    let addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let join = tokio::spawn(async move {
        axum::serve(listener, router())
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
            .map_err(|e| anyhow::anyhow!(e))
    });

    Ok(HealthHandle {
        addr,
        shutdown_tx,
        join,
    })
}
