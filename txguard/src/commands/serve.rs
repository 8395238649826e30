// txguard/src/commands/serve.rs
//
// USE CASE: Expose the validator over HTTP.

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use txguard_core::infrastructure::config::Settings;

use crate::http::{AppState, router};

pub async fn execute(
    mut settings: Settings,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    let addr = bind_addr(&settings.server.host, settings.server.port)?;

    let app = router(AppState::new(settings));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("🌐 Listening on http://{addr}");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// IPv4 or IPv6 literal, the latter optionally in brackets (`[::1]`).
fn bind_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let literal = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    let ip: IpAddr = literal
        .parse()
        .with_context(|| format!("Invalid bind address {}", host))?;
    Ok(SocketAddr::new(ip, port))
}
