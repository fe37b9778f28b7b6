//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use ats_score_core::config::Config;

use crate::server::ScoreServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // No subcommand-specific arguments; the server speaks MCP over stdin/stdout
}

/// Serve scoring tools over MCP until the client disconnects.
///
/// Stdout carries the protocol, so all logging must stay on stderr or in
/// the log file.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: Config) -> anyhow::Result<()> {
    info!("starting MCP server on stdio");

    let service = ScoreServer::with_config(&config)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server stopped unexpectedly")?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
