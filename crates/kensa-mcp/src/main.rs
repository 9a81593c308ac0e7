//! Kensa MCP server over stdio
//!
//! stdout carries the protocol, so all logging goes to stderr.

use anyhow::{Context, Result};
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

mod server;

use server::KensaServer;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("🔍 Kensa MCP server starting on stdio");

    let service = KensaServer::new()
        .serve(rmcp::transport::stdio())
        .await
        .context("Failed to start MCP service")?;

    service.waiting().await.context("MCP service error")?;

    tracing::info!("👋 Kensa MCP server stopped");
    Ok(())
}
