mod commands;
mod find_enemies;
mod remove_enemy;
mod rename_enemy;
mod spawn_enemy;

// Re-export command types
pub use commands::{RenameEnemyCommand, SpawnEnemyCommand};

// Re-export workflow functions
pub use find_enemies::{get_enemy, list_enemies};
pub use remove_enemy::remove_enemy;
pub use rename_enemy::rename_enemy;
pub use spawn_enemy::spawn_enemy;
