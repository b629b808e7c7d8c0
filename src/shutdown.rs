//! Graceful-shutdown trigger for the server.

use std::future::Future;
use std::io;
use tokio::signal;

/// Resolves once the process receives Ctrl+C or, on Unix, SIGTERM.
///
/// A listener that cannot be installed never fires, so a missing handler
/// cannot shut the server down on its own.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        stream.recv().await;
        Ok::<(), io::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<io::Result<()>>();

    first_signal(signal::ctrl_c(), terminate).await;
}

async fn first_signal<I, T>(interrupt: I, terminate: T)
where
    I: Future<Output = io::Result<()>>,
    T: Future<Output = io::Result<()>>,
{
    tokio::select! {
        () = listen("SIGINT", interrupt) => {
            tracing::info!("received Ctrl+C, starting graceful shutdown");
        }
        () = listen("SIGTERM", terminate) => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

async fn listen<F>(name: &'static str, signal_received: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(err) = signal_received.await {
        tracing::warn!(signal = name, error = %err, "failed to install signal handler");
        std::future::pending::<()>().await;
    }
}
