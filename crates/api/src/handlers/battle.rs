//! Battle handlers.

use arena_workflow::ports::{ArenaStore, RandomGenerator};
use arena_workflow::workflows::battle::{self, StartBattleCommand};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use crate::dto::converters::rounds_to_response;
use crate::dto::request::{BattleQuery, BattleScope, StartBattleRequest};
use crate::dto::response::BattleRoundResponse;
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// Start Battle Handler
// =============================================================================

/// Fights a player against an enemy until one of them drops to zero.
///
/// # Endpoint
///
/// `POST /battle[?scope=all]`
///
/// # Response
///
/// - `200 OK` - The rounds of this battle, or the whole log with `scope=all`
/// - `400 Bad Request` - Malformed body, or a side with no life left
/// - `404 Not Found` - Unknown player or enemy (player checked first)
pub async fn start_battle<Store, Random>(
    State(state): State<AppState<Store, Random>>,
    query: Result<Query<BattleQuery>, QueryRejection>,
    payload: Result<Json<StartBattleRequest>, JsonRejection>,
) -> Result<Json<Vec<BattleRoundResponse>>, ApiError>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    let Query(query) = query?;
    let Json(request) = payload?;
    let command = StartBattleCommand::new(request.player, request.enemy);

    let report = battle::start_battle(&*state.store, &*state.random, command).await?;

    tracing::info!(
        battle_id = %report.battle_identifier(),
        rounds = report.rounds().len(),
        victor = %report.victor(),
        "Battle resolved"
    );

    let rounds = match query.scope {
        BattleScope::Battle => report.rounds(),
        BattleScope::All => report.full_log(),
    };
    Ok(Json(rounds_to_response(rounds)))
}

// =============================================================================
// Battle Log Handlers
// =============================================================================

/// `GET /battle`: every round ever fought.
pub async fn list_battles<Store, Random>(
    State(state): State<AppState<Store, Random>>,
) -> Json<Vec<BattleRoundResponse>>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    let rounds = battle::list_battle_log(&*state.store).await;

    tracing::debug!(count = rounds.len(), "Listing battle log");

    Json(rounds_to_response(&rounds))
}

/// `GET /battle/{battle_id}`: the rounds of one battle.
pub async fn get_battle<Store, Random>(
    State(state): State<AppState<Store, Random>>,
    Path(battle_id): Path<String>,
) -> Result<Json<Vec<BattleRoundResponse>>, ApiError>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    tracing::debug!(%battle_id, "Fetching battle");

    let rounds = battle::get_battle(&*state.store, &battle_id).await?;

    Ok(Json(rounds_to_response(&rounds)))
}
