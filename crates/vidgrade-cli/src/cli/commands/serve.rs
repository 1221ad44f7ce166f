use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use vidgrade_core::{AnalyzerConfig, VideoAnalyzer};

use crate::cli::args::ServeArgs;
use crate::exit_codes;
use crate::server;

pub async fn run(args: ServeArgs) -> anyhow::Result<i32> {
    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.bind, args.port))?;

    let analyzer = VideoAnalyzer::from_config(&AnalyzerConfig::from_env())
        .context("failed to initialize analyzer")?;

    server::start_server(addr, Arc::new(analyzer)).await?;
    Ok(exit_codes::SUCCESS)
}
