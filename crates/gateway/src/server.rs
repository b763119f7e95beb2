//! Server loop with a bounded graceful shutdown

use axum::Router;
use std::future::Future;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// Serve `app` until `signal` resolves, then give in-flight requests at most
/// `grace` to finish before returning.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let shutdown = async move {
        signal.await;
        let _ = signalled_tx.send(());
    };

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    });

    tokio::select! {
        result = &mut server => return Ok(result??),
        _ = signalled_rx => {}
    }

    info!(grace_secs = grace.as_secs_f64(), "Draining in-flight requests");

    match tokio::time::timeout(grace, &mut server).await {
        Ok(result) => Ok(result??),
        Err(_) => {
            warn!(
                grace_secs = grace.as_secs_f64(),
                "Shutdown grace period elapsed, dropping open connections"
            );
            server.abort();
            Ok(())
        }
    }
}
