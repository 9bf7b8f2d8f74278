//! Enemy handlers.
//!
//! Same routes as the player handlers under `/enemy`, except that creation
//! takes only a nickname and rolls the stats.

use arena_domain::combatant::Combatant;
use arena_workflow::ports::{ArenaStore, RandomGenerator};
use arena_workflow::workflows::enemy::{self, RenameEnemyCommand, SpawnEnemyCommand};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::{CreateEnemyRequest, RenameRequest};
use crate::dto::response::CombatantResponse;
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// Create Enemy Handler
// =============================================================================

/// Spawns an enemy with life and attack drawn from `[1, 10]`.
///
/// # Response
///
/// - `201 Created` - The stored enemy
/// - `400 Bad Request` - Malformed body or blank nickname
/// - `409 Conflict` - Nickname already used by another enemy
pub async fn create_enemy<Store, Random>(
    State(state): State<AppState<Store, Random>>,
    payload: Result<Json<CreateEnemyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CombatantResponse>), ApiError>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    let Json(request) = payload?;
    let command = SpawnEnemyCommand::new(request.nickname);

    let enemy = enemy::spawn_enemy(&*state.store, &*state.random, command).await?;

    tracing::info!(
        nickname = %enemy.nickname(),
        life = enemy.life().value(),
        attack = enemy.attack().value(),
        "Enemy spawned"
    );

    Ok((StatusCode::CREATED, Json(CombatantResponse::from(&enemy))))
}

// =============================================================================
// Query Handlers
// =============================================================================

pub async fn list_enemies<Store, Random>(
    State(state): State<AppState<Store, Random>>,
) -> Json<Vec<CombatantResponse>>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    let enemies = enemy::list_enemies(&*state.store).await;

    tracing::debug!(count = enemies.len(), "Listing enemies");

    Json(enemies.iter().map(CombatantResponse::from).collect())
}

pub async fn get_enemy<Store, Random>(
    State(state): State<AppState<Store, Random>>,
    Path(nickname): Path<String>,
) -> Result<Json<CombatantResponse>, ApiError>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    tracing::debug!(%nickname, "Fetching enemy");

    let enemy = enemy::get_enemy(&*state.store, &nickname).await?;

    Ok(Json(CombatantResponse::from(&enemy)))
}

// =============================================================================
// Rename / Delete Handlers
// =============================================================================

pub async fn rename_enemy<Store, Random>(
    State(state): State<AppState<Store, Random>>,
    Path(nickname): Path<String>,
    payload: Result<Json<RenameRequest>, JsonRejection>,
) -> Result<Json<CombatantResponse>, ApiError>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    let Json(request) = payload?;
    let command = RenameEnemyCommand::new(nickname, request.nickname);

    let enemy = enemy::rename_enemy(&*state.store, command).await?;

    tracing::info!(nickname = %enemy.nickname(), "Enemy renamed");

    Ok(Json(CombatantResponse::from(&enemy)))
}

pub async fn delete_enemy<Store, Random>(
    State(state): State<AppState<Store, Random>>,
    Path(nickname): Path<String>,
) -> Result<StatusCode, ApiError>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    let removed = enemy::remove_enemy(&*state.store, &nickname).await?;

    tracing::info!(nickname = %removed.nickname(), "Enemy deleted");

    Ok(StatusCode::NO_CONTENT)
}
