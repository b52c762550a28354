//! The `quizforge serve` command.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

pub async fn execute(
    bank: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    config: Option<PathBuf>,
) -> Result<()> {
    let (config, bank) = super::load_bank(bank, config)?;

    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;

    quizforge_server::serve(Arc::new(bank), addr).await
}
