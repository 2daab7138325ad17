#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod telemetry;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    telemetry::init();

    run().await.inspect_err(|e| tracing::error!(error = %e, "server exited"))
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env();

    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let site_root = config.resolve_site_root(&leptos_options.site_root);
    tracing::info!(site_root = %site_root.display(), "serving static assets");

    let app = routes::app(leptos_options, &site_root);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "stavlav listening");
    axum::serve(listener, app).await?;
    Ok(())
}
