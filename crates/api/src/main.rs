use arena_api::config::AppConfig;
use arena_api::routes::create_router;
use arena_api::server::Server;
use arena_api::state::AppState;
use arena_infrastructure::adapters::{ConfiguredRandomGenerator, InMemoryArenaStore};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!("Dice Arena - Starting Server");

    let config = AppConfig::from_env()?;

    tracing::info!(
        max_player_life = config.limits.max_life(),
        seeded = config.random.seed.is_some(),
        "Configuration loaded"
    );

    let store = InMemoryArenaStore::new();
    let random = ConfiguredRandomGenerator::from_config(&config.random);

    let state = AppState::new(store, random, config.limits);

    let router = create_router(state);

    let server = Server::new(config.server);
    server.run(router).await
}

/// `RUST_LOG` filters as usual; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("arena_api=debug,tower_http=debug,info"));

    let json_output = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_output.then(|| fmt::layer().json().with_target(true)))
        .with((!json_output).then(|| fmt::layer().with_target(true).with_thread_ids(true)))
        .init();
}
