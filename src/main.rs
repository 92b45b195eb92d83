//! GitHub Repository Mapper - a flat file index over one repository
//!
//! # Usage
//! ```bash
//! GITHUB_TOKEN=... GITHUB_OWNER=octocat GITHUB_REPO=hello-world repo-mapper
//! repo-mapper --owner octocat --repo hello-world --token ...  # flags work too
//! PORT=8080 repo-mapper                                       # non-default port
//! ```

mod error;
mod github;
mod models;
mod routes;

use std::sync::Arc;

use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use github::{GITHUB_API_URL, GitHubClient, RepoMapper};
use models::ServiceInfo;
use routes::health::ServerStart;

/// GitHub Repository Mapper - serve a flat file map of one repository
#[derive(Parser)]
#[command(name = "repo-mapper")]
#[command(about = "Map a GitHub repository into a flat path -> file index", long_about = None)]
struct Cli {
    /// Personal access token sent with every contents API call
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Owner (user or organization) of the repository to map
    #[arg(long, env = "GITHUB_OWNER")]
    owner: String,

    /// Name of the repository to map
    #[arg(long, env = "GITHUB_REPO")]
    repo: String,

    /// Base URL of the GitHub API
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL)]
    api_url: String,

    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (quieter for production)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,repo_mapper=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build the GitHub client; refuses to start without a token
    let client =
        match GitHubClient::new(cli.token, cli.owner.as_str(), cli.repo.as_str(), cli.api_url) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("✗ Failed to configure GitHub client: {}", e);
                eprintln!("  Set GITHUB_TOKEN (or pass --token) to a personal access token.");
                std::process::exit(1);
            }
        };

    let mapper = Arc::new(RepoMapper::new(client));
    let info = ServiceInfo::for_repository(&cli.owner, &cli.repo);
    let start = ServerStart::now();

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(mapper, info, start)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Bind to the port
    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to port {}: {}", cli.port, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    // Print startup message
    let url = format!("http://127.0.0.1:{}", cli.port);
    println!();
    println!("  ┌─────────────────────────────────────────────┐");
    println!("  │          GitHub Repository Mapper           │");
    println!("  └─────────────────────────────────────────────┘");
    println!();
    println!("  Repository: {}/{}", cli.owner, cli.repo);
    println!("  Server:     {}", url);
    println!();
    println!("  Endpoints:");
    println!("    GET /        - Service description");
    println!("    GET /files   - Flat file map of the repository");
    println!("    GET /health  - Health check");
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    // Set up graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        println!("\n  Shutting down...");
    };

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
