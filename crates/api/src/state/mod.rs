use std::sync::Arc;

use arena_domain::combatant::PlayerLimits;
use arena_workflow::ports::{ArenaStore, RandomGenerator};

// =============================================================================
// AppState
// =============================================================================

/// Dependencies shared by every handler.
#[derive(Clone)]
pub struct AppState<Store, Random>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    pub store: Arc<Store>,

    pub random: Arc<Random>,

    pub limits: PlayerLimits,
}

impl<Store, Random> AppState<Store, Random>
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    #[must_use]
    pub fn new(store: Store, random: Random, limits: PlayerLimits) -> Self {
        Self {
            store: Arc::new(store),
            random: Arc::new(random),
            limits,
        }
    }
}
