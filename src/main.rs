// file: src/main.rs
// description: commandline application entry point with transport selection
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use blog_mcp::mcp::{ToolDispatcher, http, server};
use blog_mcp::utils::logging;
use blog_mcp::{BlogPublisher, Config};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "blog_mcp")]
#[command(version = "0.1.0")]
#[command(about = "MCP server that publishes Markdown blog posts to a git-backed site", long_about = None)]
struct Cli {
    /// stdio for local MCP clients, http for the JSON-RPC endpoint
    #[arg(short, long, value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logger(cli.color, cli.verbose);

    info!("Blog MCP Server");
    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using environment and defaults",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(host) = cli.host {
        config.http.host = host;
    }
    if let Some(port) = cli.port {
        config.http.port = port;
    }

    info!(
        "Publishing to {}/{} (branch {}) from {}",
        config.github.owner,
        config.github.repo,
        config.github.branch,
        config.blog.repo_path.display()
    );

    if let Err(e) = blog_mcp::utils::Validator::validate_directory(&config.blog.repo_path) {
        warn!("Blog checkout not usable yet: {}", e);
    }

    let http_config = config.http.clone();
    let publisher = BlogPublisher::new(config);
    let dispatcher = Arc::new(ToolDispatcher::new(publisher));

    match cli.transport {
        Transport::Stdio => server::serve_stdio(dispatcher).await?,
        Transport::Http => {
            // stdout is free in http mode, so print a reachable-endpoint banner
            println!(
                "{}",
                logging::format_info(&format!(
                    "MCP HTTP server: http://{}:{}",
                    http_config.host, http_config.port
                ))
            );
            println!(
                "{}",
                logging::format_info(&format!(
                    "JSON-RPC endpoint: http://{}:{}/message",
                    http_config.host, http_config.port
                ))
            );
            http::serve(dispatcher, &http_config.host, http_config.port).await?
        }
    }

    Ok(())
}
