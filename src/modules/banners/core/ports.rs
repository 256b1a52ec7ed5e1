// Ports define what the banners use cases need from a store, without implementing it.
//
// Responsibilities
// - Describe the store contract as a trait so handlers stay independent of the backend.
// - Classify store failures into typed errors.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits in the adapters layer.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::banners::core::banner::Banner;
use crate::shared::core::primitives::BannerId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BannerStoreError {
    #[error("banner {id} not found")]
    NotFound { id: BannerId },
}

/// Linearizable CRUD over the banner collection.
///
/// Every call is atomic with respect to every other call on the same store.
/// `list` returns an owned snapshot, never a view into the store.
#[async_trait]
pub trait BannerStore: Send + Sync {
    /// All banners in insertion order.
    async fn list(&self) -> Vec<Banner>;

    async fn get(&self, id: BannerId) -> Result<Banner, BannerStoreError>;

    /// Creates the banner when its id is unassigned, otherwise replaces the
    /// banner with the same id in place. Unknown explicit ids are rejected.
    async fn upsert(&self, banner: Banner) -> Result<Banner, BannerStoreError>;

    /// Removes and returns the banner, keeping the order of the others.
    async fn remove_by_id(&self, id: BannerId) -> Result<Banner, BannerStoreError>;

    /// Takes the next id from the sequence ahead of the record commit, so a
    /// blob keyed by that id can be stored first.
    async fn reserve_id(&self) -> BannerId;

    /// Appends a banner carrying an id obtained from `reserve_id`. Each
    /// reservation can be committed once.
    async fn commit_reserved(&self, banner: Banner) -> Result<Banner, BannerStoreError>;

    /// Drops a reservation that will not be committed. The id stays burned.
    async fn release_reserved(&self, id: BannerId);
}
