use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use canvas_backend::packets::catalog::PacketCatalog;
use canvas_backend::packets::handlers::handle_list_packets;
use canvas_backend::scoring::handlers::handle_score;
use canvas_backend::tfidf::handlers::handle_tfidf;
use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

fn parse_args(args: &[String]) -> anyhow::Result<(SocketAddr, Option<PathBuf>)> {
    let mut bind_addr: SocketAddr = "127.0.0.1:5000".parse()?;
    let mut packets_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args.get(i + 1).context("--bind requires <addr:port>")?;
                bind_addr = value.parse()?;
                i += 2;
            }
            "--packets" => {
                let value = args.get(i + 1).context("--packets requires <file>")?;
                packets_path = Some(PathBuf::from(value));
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--packets <file>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:5000", args[0]);
                eprintln!(
                    "Example: {} --bind 0.0.0.0:5000 --packets custom_packets.json",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok((bind_addr, packets_path))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (bind_addr, packets_path) = parse_args(&args)?;

    // 1. Packet catalog (loaded once, read-only afterwards):
    let catalog = match &packets_path {
        Some(path) => {
            tracing::info!("Loading packet catalog from {}", path.display());
            PacketCatalog::load(path)?
        }
        None => {
            tracing::info!("Using bundled packet catalog");
            PacketCatalog::bundled()
        }
    };
    tracing::info!("Catalog holds {} packets", catalog.packet_count());
    let catalog = Arc::new(catalog);

    // 2. HTTP Router:
    // Permissive CORS: the browser frontend is served from another origin.
    let app = Router::new()
        .route("/tfidf", post(handle_tfidf))
        .route("/problem-canvas", post(handle_score))
        .route("/packets", get(handle_list_packets))
        .layer(Extension(catalog))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
