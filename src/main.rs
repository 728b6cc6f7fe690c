//! GearPack
//!
//! An MCP server for hiking pack weight calculations.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use gearpack::build_info;
use gearpack::config::{Config, DEFAULT_LOG_DIRECTIVE};
use gearpack::mcp::GearPackService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never mix with MCP frames on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env();
    tracing::info!("Default display unit: {}", config.display_unit);

    let service = GearPackService::new(config);
    let transport = (stdin(), stdout());

    eprintln!("Starting MCP server on stdio...");
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
