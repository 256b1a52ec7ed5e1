// In memory implementation of the BannerStore port.
//
// Purpose
// - Hold the authoritative banner collection for the lifetime of the process.
//
// Responsibilities
// - Keep banners in insertion order.
// - Allocate ids from a sequence owned by this instance.
// - Guard the collection, the sequence and the reservations with one lock.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::banners::core::banner::Banner;
use crate::modules::banners::core::ports::{BannerStore, BannerStoreError};
use crate::shared::core::primitives::{BannerId, IdSequence};

#[derive(Default)]
struct Inner {
    items: Vec<Banner>,
    ids: IdSequence,
    reserved: HashSet<BannerId>,
}

impl Inner {
    fn position(&self, id: BannerId) -> Option<usize> {
        self.items.iter().position(|banner| banner.id == id)
    }
}

#[derive(Default)]
pub struct InMemoryBannerStore {
    inner: RwLock<Inner>,
}

impl InMemoryBannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reservations taken but neither committed nor released.
    pub async fn pending_reservations(&self) -> usize {
        self.inner.read().await.reserved.len()
    }
}

#[async_trait]
impl BannerStore for InMemoryBannerStore {
    async fn list(&self) -> Vec<Banner> {
        self.inner.read().await.items.clone()
    }

    async fn get(&self, id: BannerId) -> Result<Banner, BannerStoreError> {
        let guard = self.inner.read().await;
        guard
            .position(id)
            .map(|index| guard.items[index].clone())
            .ok_or(BannerStoreError::NotFound { id })
    }

    async fn upsert(&self, mut banner: Banner) -> Result<Banner, BannerStoreError> {
        let mut guard = self.inner.write().await;
        if banner.is_new() {
            banner.id = guard.ids.next_id();
            tracing::debug!(id = banner.id, "allocated banner id");
            guard.items.push(banner.clone());
            return Ok(banner);
        }

        let index = guard
            .position(banner.id)
            .ok_or(BannerStoreError::NotFound { id: banner.id })?;
        guard.items[index] = banner.clone();
        Ok(banner)
    }

    async fn remove_by_id(&self, id: BannerId) -> Result<Banner, BannerStoreError> {
        let mut guard = self.inner.write().await;
        let index = guard
            .position(id)
            .ok_or(BannerStoreError::NotFound { id })?;
        let removed = guard.items.remove(index);
        tracing::debug!(id, "removed banner");
        Ok(removed)
    }

    async fn reserve_id(&self) -> BannerId {
        let mut guard = self.inner.write().await;
        let id = guard.ids.next_id();
        guard.reserved.insert(id);
        tracing::debug!(id, "reserved banner id");
        id
    }

    async fn commit_reserved(&self, banner: Banner) -> Result<Banner, BannerStoreError> {
        let mut guard = self.inner.write().await;
        if !guard.reserved.remove(&banner.id) {
            return Err(BannerStoreError::NotFound { id: banner.id });
        }
        guard.items.push(banner.clone());
        Ok(banner)
    }

    async fn release_reserved(&self, id: BannerId) {
        if self.inner.write().await.reserved.remove(&id) {
            tracing::debug!(id, "released banner id reservation");
        }
    }
}
