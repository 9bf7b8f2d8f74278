use arena_domain::battle::BattleRound;
use arena_domain::combatant::{Combatant, Enemy, Player};

use super::response::{BattleRoundResponse, CombatantResponse};

// =============================================================================
// Combatant Conversion
// =============================================================================

fn combatant_response(combatant: &impl Combatant) -> CombatantResponse {
    CombatantResponse {
        nickname: combatant.nickname().value().to_string(),
        life: combatant.life().value(),
        attack: combatant.attack().value(),
    }
}

impl From<&Player> for CombatantResponse {
    fn from(player: &Player) -> Self {
        combatant_response(player)
    }
}

impl From<&Enemy> for CombatantResponse {
    fn from(enemy: &Enemy) -> Self {
        combatant_response(enemy)
    }
}

// =============================================================================
// BattleRound Conversion
// =============================================================================

impl From<&BattleRound> for BattleRoundResponse {
    fn from(round: &BattleRound) -> Self {
        Self {
            id: round.battle_identifier().to_string(),
            round: round.round(),
            enemy: round.enemy_nickname().value().to_string(),
            player: round.player_nickname().value().to_string(),
            dice_thrown: round.dice_value().value(),
            winner: round.winner_nickname().value().to_string(),
        }
    }
}

pub fn rounds_to_response(rounds: &[BattleRound]) -> Vec<BattleRoundResponse> {
    rounds.iter().map(BattleRoundResponse::from).collect()
}
