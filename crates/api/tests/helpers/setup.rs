use arena_api::routes::create_router;
use arena_api::server::serve;
use arena_api::state::AppState;
use arena_domain::combatant::PlayerLimits;
use arena_infrastructure::adapters::{DeterministicRandomGenerator, InMemoryArenaStore};
use serde_json::json;
use tokio::net::TcpListener;

use super::TestClient;

const DEFAULT_SEED: u64 = 7;

/// A server on an ephemeral port with its own empty arena.
pub struct IntegrationTestContext {
    pub client: TestClient,
}

impl IntegrationTestContext {
    pub async fn new() -> Self {
        Self::with_limits(PlayerLimits::default()).await
    }

    pub async fn with_limits(limits: PlayerLimits) -> Self {
        Self::start(limits, DEFAULT_SEED).await
    }

    pub async fn with_seed(seed: u64) -> Self {
        Self::start(PlayerLimits::default(), seed).await
    }

    async fn start(limits: PlayerLimits, seed: u64) -> Self {
        let state = AppState::new(
            InMemoryArenaStore::new(),
            DeterministicRandomGenerator::new(seed),
            limits,
        );
        let router = create_router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let address = listener.local_addr().expect("Listener has no address");

        tokio::spawn(async move {
            serve(listener, router).await.expect("Test server failed");
        });

        Self {
            client: TestClient::new(&format!("http://{}", address)),
        }
    }

    pub async fn create_player(&self, nickname: &str, life: i32, attack: i32) {
        let request = json!({ "nickname": nickname, "life": life, "attack": attack });

        let response = self.client.post("/player", &request).await;
        assert_eq!(
            response.status_code(),
            201,
            "Failed to create player: {:?}",
            response.body
        );
    }

    pub async fn create_enemy(&self, nickname: &str) -> serde_json::Value {
        let request = json!({ "nickname": nickname });

        let response = self.client.post("/enemy", &request).await;
        assert_eq!(
            response.status_code(),
            201,
            "Failed to create enemy: {:?}",
            response.body
        );
        response.body
    }
}
