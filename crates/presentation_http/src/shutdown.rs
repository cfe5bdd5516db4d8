//! Graceful shutdown with a bounded drain period

use std::future::Future;
use std::time::Duration;

use tokio::signal;
use tracing::info;

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every connection closed in time
    Graceful,
    /// Connections were still open when the grace period ran out
    GracePeriodElapsed,
}

/// Wait for Ctrl+C or SIGTERM
pub async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

/// Drive `server` to completion, giving it at most `grace` once `triggered` fires
///
/// `server` is expected to start draining on the same signal that resolves
/// `triggered`. It is dropped if it has not finished when the grace period
/// ends.
///
/// # Errors
///
/// Returns the server's own error if it fails before or during the drain.
pub async fn serve_with_grace<S, T, E>(
    server: S,
    triggered: T,
    grace: Duration,
) -> Result<ShutdownOutcome, E>
where
    S: Future<Output = Result<(), E>>,
    T: Future<Output = ()>,
{
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result.map(|()| ShutdownOutcome::Graceful),
        () = triggered => {}
    }

    info!("⏳ Waiting up to {:?} for connections to close...", grace);

    match tokio::time::timeout(grace, server).await {
        Ok(result) => result.map(|()| ShutdownOutcome::Graceful),
        Err(_) => Ok(ShutdownOutcome::GracePeriodElapsed),
    }
}
