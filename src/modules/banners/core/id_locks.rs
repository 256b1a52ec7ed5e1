// Per-banner mutual exclusion for multi-step operations.
//
// Saving a banner touches two resources (the image sink, then the store).
// Holding the banner's lock across both steps keeps concurrent saves and
// removals of the same banner from interleaving, while the store lock itself
// is only held for single store calls.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::shared::core::primitives::BannerId;

#[derive(Default)]
pub struct IdLocks {
    locks: Mutex<HashMap<BannerId, Arc<Mutex<()>>>>,
}

impl IdLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `id`. Released when the guard drops.
    pub async fn lock(&self, id: BannerId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Entries only the map refers to are neither held nor awaited.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(id).or_default().clone()
        };
        lock.lock_owned().await
    }

    pub async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
