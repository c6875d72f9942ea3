use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, error, info, report::Reporter};

/// Builds the router, binds the configured address and serves until a
/// shutdown signal arrives. Bind and serve failures are fatal; there is
/// nothing useful this process can do without its HTTP surface.
pub async fn start_api_server(address: Option<String>, reporter: Arc<Reporter>) {
    let app = Router::new()
        .route("/", get(api::login))
        .route("/callback", get(api::callback))
        .route("/health", get(api::health))
        .layer(Extension(reporter));

    let addr = address.unwrap_or_else(config::server_addr);
    let addr = match SocketAddr::from_str(&addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };
    info!("Servidor ouvindo em http://{addr}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
    }
}

/// Completes on Ctrl-C or, on Unix, SIGTERM. Resolving this future lets
/// axum drain in-flight requests before `main` tears the tunnel down.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Sinal de encerramento recebido.");
}
