mod commands;
mod find_players;
mod register_player;
mod remove_player;
mod rename_player;

// Re-export command types
pub use commands::{RegisterPlayerCommand, RenamePlayerCommand};

// Re-export workflow functions
pub use find_players::{get_player, list_players};
pub use register_player::register_player;
pub use remove_player::remove_player;
pub use rename_player::rename_player;
