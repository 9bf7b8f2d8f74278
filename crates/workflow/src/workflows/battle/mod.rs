mod battle_log;
mod commands;
mod report;
mod start_battle;

// Re-export command types
pub use commands::StartBattleCommand;

pub use report::BattleReport;

// Re-export workflow functions
pub use battle_log::{get_battle, list_battle_log};
pub use start_battle::start_battle;
