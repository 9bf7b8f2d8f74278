//! Process-local arena store.

use std::future::Future;
use std::sync::Arc;

use arena_domain::arena::ArenaState;
use arena_workflow::ports::ArenaStore;
use tokio::sync::RwLock;

// =============================================================================
// InMemoryArenaStore
// =============================================================================

/// Holds the only [`ArenaState`] of the process behind one async `RwLock`.
///
/// Clones share the same state. Writers are exclusive for the whole closure
/// passed to [`ArenaStore::write`], which is what makes a battle's lookup,
/// write-back and log append a single atomic step.
#[derive(Clone, Debug, Default)]
pub struct InMemoryArenaStore {
    state: Arc<RwLock<ArenaState>>,
}

impl InMemoryArenaStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_state(state: ArenaState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

impl ArenaStore for InMemoryArenaStore {
    fn read<F, T>(&self, operation: F) -> impl Future<Output = T> + Send
    where
        F: FnOnce(&ArenaState) -> T + Send,
        T: Send,
    {
        let state = Arc::clone(&self.state);
        async move {
            let guard = state.read().await;
            operation(&guard)
        }
    }

    fn write<F, T>(&self, operation: F) -> impl Future<Output = T> + Send
    where
        F: FnOnce(&mut ArenaState) -> T + Send,
        T: Send,
    {
        let state = Arc::clone(&self.state);
        async move {
            let mut guard = state.write().await;
            tracing::trace!("Acquired exclusive arena access");
            operation(&mut guard)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
