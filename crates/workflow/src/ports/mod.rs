use std::future::Future;

use arena_domain::arena::ArenaState;
use arena_domain::common::RandomSeed;

// =============================================================================
// Type Aliases for Workflow Results
// =============================================================================

pub type WorkflowResult<T> = Result<T, crate::errors::WorkflowError>;

// =============================================================================
// ArenaStore
// =============================================================================

/// Owner of the single [`ArenaState`] of a running service.
///
/// `read` runs the operation with shared access and `write` with exclusive
/// access. An operation passed to `write` observes no other writer for its
/// whole duration, so a check followed by a mutation inside one closure is
/// atomic. Operations must not block.
pub trait ArenaStore: Clone + Send + Sync + 'static {
    fn read<F, T>(&self, operation: F) -> impl Future<Output = T> + Send
    where
        F: FnOnce(&ArenaState) -> T + Send,
        T: Send;

    fn write<F, T>(&self, operation: F) -> impl Future<Output = T> + Send
    where
        F: FnOnce(&mut ArenaState) -> T + Send,
        T: Send;
}

// =============================================================================
// RandomGenerator
// =============================================================================

/// Source of seeds for enemy stats and battle dice.
pub trait RandomGenerator: Clone + Send + Sync + 'static {
    fn generate_seed(&self) -> RandomSeed;
}

// =============================================================================
// Tests
// =============================================================================
