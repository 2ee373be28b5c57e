use lettercount_server::{build_router, logging, serve, AppState, RelayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RelayConfig::load()?;
    logging::init_tracing("info");

    tracing::info!(
        host = %config.host,
        port = %config.port,
        upstream = %config.upstream_url,
        "Starting lettercount relay"
    );

    let http = reqwest::Client::builder().build()?;
    let state = AppState::new(config.clone(), http);
    let router = build_router(state);

    serve(router, &config).await?;
    Ok(())
}
