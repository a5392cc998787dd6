use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::router::serve;
use crate::state::AppState;
use anyhow::Context;
use astra::Server;

mod catalog;
mod config;
mod constants;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let catalog = match &config.data_dir {
        Some(dir) => Catalog::load(dir)
            .with_context(|| format!("failed to load catalog from {}", dir.display()))?,
        None => Catalog::builtin().context("failed to load built-in catalog")?,
    };
    let source = match &config.data_dir {
        Some(dir) => dir.display().to_string(),
        None => "built-in".to_string(),
    };
    tracing::info!(
        listings = catalog.listings().len(),
        agents = catalog.agents().len(),
        posts = catalog.posts().len(),
        %source,
        "catalog loaded"
    );

    let state = AppState::new(catalog, &config);
    let addr = config.bind_addr();
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);
    server
        .serve(move |req, _info| serve(req, &state))
        .with_context(|| format!("server on {addr} ended with error"))?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
