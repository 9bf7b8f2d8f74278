//! Player handlers.
//!
//! - `POST /player` registers a player with caller-supplied stats
//! - `GET /player` lists players
//! - `GET /player/{nickname}` fetches one player
//! - `PUT /player/{nickname}` renames a player
//! - `DELETE /player/{nickname}` removes a player

use arena_domain::combatant::Combatant;
use arena_workflow::ports::{ArenaStore, RandomGenerator};
use arena_workflow::workflows::player::{self, RegisterPlayerCommand, RenamePlayerCommand};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::{CreatePlayerRequest, RenameRequest};
use crate::dto::response::CombatantResponse;
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// Create Player Handler
// =============================================================================

/// Registers a player.
///
/// # Response
///
/// - `201 Created` - The stored player
/// - `400 Bad Request` - Malformed body or stats out of range
/// - `409 Conflict` - Nickname already used by another player
pub async fn create_player<Store, Random>(
    State(state): State<AppState<Store, Random>>,
    payload: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CombatantResponse>), ApiError>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    let Json(request) = payload?;
    let command = RegisterPlayerCommand::new(request.nickname, request.life, request.attack);

    let player = player::register_player(&*state.store, &state.limits, command).await?;

    tracing::info!(
        nickname = %player.nickname(),
        life = player.life().value(),
        attack = player.attack().value(),
        "Player registered"
    );

    Ok((StatusCode::CREATED, Json(CombatantResponse::from(&player))))
}

// =============================================================================
// Query Handlers
// =============================================================================

pub async fn list_players<Store, Random>(
    State(state): State<AppState<Store, Random>>,
) -> Json<Vec<CombatantResponse>>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    let players = player::list_players(&*state.store).await;

    tracing::debug!(count = players.len(), "Listing players");

    Json(players.iter().map(CombatantResponse::from).collect())
}

pub async fn get_player<Store, Random>(
    State(state): State<AppState<Store, Random>>,
    Path(nickname): Path<String>,
) -> Result<Json<CombatantResponse>, ApiError>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    tracing::debug!(%nickname, "Fetching player");

    let player = player::get_player(&*state.store, &nickname).await?;

    Ok(Json(CombatantResponse::from(&player)))
}

// =============================================================================
// Rename Player Handler
// =============================================================================

/// Renames a player. Life and attack are kept.
///
/// # Response
///
/// - `200 OK` - The renamed player
/// - `404 Not Found` - No player with the nickname in the path
/// - `409 Conflict` - The new nickname is taken
pub async fn rename_player<Store, Random>(
    State(state): State<AppState<Store, Random>>,
    Path(nickname): Path<String>,
    payload: Result<Json<RenameRequest>, JsonRejection>,
) -> Result<Json<CombatantResponse>, ApiError>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    let Json(request) = payload?;
    let command = RenamePlayerCommand::new(nickname, request.nickname);

    let player = player::rename_player(&*state.store, command).await?;

    tracing::info!(nickname = %player.nickname(), "Player renamed");

    Ok(Json(CombatantResponse::from(&player)))
}

// =============================================================================
// Delete Player Handler
// =============================================================================

pub async fn delete_player<Store, Random>(
    State(state): State<AppState<Store, Random>>,
    Path(nickname): Path<String>,
) -> Result<StatusCode, ApiError>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    let removed = player::remove_player(&*state.store, &nickname).await?;

    tracing::info!(nickname = %removed.nickname(), "Player deleted");

    Ok(StatusCode::NO_CONTENT)
}
