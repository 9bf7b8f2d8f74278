pub mod converters;
pub mod request;
pub mod response;

pub use request::{
    BattleQuery, BattleScope, CreateEnemyRequest, CreatePlayerRequest, RenameRequest,
    StartBattleRequest,
};
pub use response::{
    BattleRoundResponse, CombatantResponse, ErrorDetailResponse, ErrorResponse, HealthResponse,
};
