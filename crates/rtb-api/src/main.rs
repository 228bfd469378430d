//! # rtb-api: Binary Entry Point
//!
//! Parses configuration, installs logging, and serves the gated router
//! until Ctrl-C or SIGTERM.

use anyhow::Context;
use clap::Parser;
use rtb_api::config::ServerConfig;
use rtb_core::{AccessGuard, CredentialSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    rtb_api::telemetry::init(config.log_format);

    let source = config.credential_source();
    if source.expected_credential().is_none() {
        tracing::warn!(
            var = source.var(),
            "credential variable is unset; protected requests will be rejected until it is set"
        );
    }

    let guard = AccessGuard::new(config.policy(), source);
    tracing::info!(policy = ?guard.policy(), "access guard configured");

    let app = rtb_api::app(guard);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("RTB API gate listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
