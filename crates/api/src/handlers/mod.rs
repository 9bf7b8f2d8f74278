pub mod battle;
pub mod enemy;
pub mod health;
pub mod player;

// Re-export handlers for convenient access
pub use battle::{get_battle, list_battles, start_battle};
pub use enemy::{create_enemy, delete_enemy, get_enemy, list_enemies, rename_enemy};
pub use health::health_check;
pub use player::{create_player, delete_player, get_player, list_players, rename_player};
