use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use offers_api::{app, AppState};
use offers_service::DefaultOffersService;
use offers_store::{app_config::Config, InMemoryOffersRepository, StaticAccountStatusClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "offers_api=debug,offers_service=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Offers API on port {}", config.server.port);

    let repository = if config.store.seed_demo_offers {
        InMemoryOffersRepository::with_demo_offers()
    } else {
        InMemoryOffersRepository::new()
    };
    tracing::info!("Offer store ready with {} offers", repository.len().await);

    let accounts = StaticAccountStatusClient::from_config(&config.accounts);
    let service = DefaultOffersService::new(Arc::new(repository), Arc::new(accounts));

    let app = app(AppState::new(Arc::new(service)));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
