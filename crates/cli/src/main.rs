//! # Mesh Agent
//!
//! Edge-node agent serving the session cache, route table and failover API

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use mesh_agent_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "mesh-agent")]
#[command(version)]
#[command(about = "Service-mesh edge agent with session caching and fast failover")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address (overrides config)
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port (overrides config)
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Maximum number of cached sessions (overrides config)
    #[arg(long)]
    cache_capacity: Option<usize>,

    /// Log level: trace, debug, info, warn, error (overrides config)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        cache_capacity: cli.cache_capacity,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config.logging)?;

    info!("Mesh Agent starting...");
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        bind = %config.server.bind_address,
        port = config.server.port,
        cache_capacity = config.cache.capacity,
        static_routes = config.routes.len(),
        "Configuration loaded"
    );

    let components = di::Components::build(&config)?;

    server::start_web_server(&config.server, components.app_state()).await?;

    info!(
        sessions = components.cache.len(),
        routes = components.routes.len(),
        "Mesh Agent stopped"
    );

    Ok(())
}
