use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;

use markscout::aggregator::Aggregator;
use markscout::api::create_router;
use markscout::config::Config;

#[derive(Parser)]
#[command(name = "markscout", about = "Trademark search fan-out server", version)]
struct Args {
    /// Address to listen on (overrides MARKSCOUT_BIND_ADDR)
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<SocketAddr>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber (log macros are bridged into it)
    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .init();

    let config = Config::from_env()?;
    let bind_addr = args.bind.unwrap_or(config.bind_addr);
    tracing::info!("using Marker API at {}", config.base_url);

    let aggregator = Arc::new(Aggregator::new(&config));
    let app = create_router(aggregator);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
