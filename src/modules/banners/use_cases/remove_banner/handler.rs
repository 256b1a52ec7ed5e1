use std::sync::Arc;

use crate::modules::banners::core::banner::Banner;
use crate::modules::banners::core::id_locks::IdLocks;
use crate::modules::banners::core::ports::{BannerStore, BannerStoreError};
use crate::shared::core::primitives::BannerId;
use crate::shared::infrastructure::image_sink::ImageSink;

/// Removes a banner, then its image. A failed image removal is logged and
/// does not undo the removal of the record.
pub struct RemoveBannerHandler {
    store: Arc<dyn BannerStore>,
    sink: Arc<dyn ImageSink>,
    locks: Arc<IdLocks>,
}

impl RemoveBannerHandler {
    pub fn new(store: Arc<dyn BannerStore>, sink: Arc<dyn ImageSink>) -> Self {
        Self::with_locks(store, sink, Arc::new(IdLocks::new()))
    }

    /// Shares `locks` with the save handler so a removal waits for an
    /// in-flight save of the same banner.
    pub fn with_locks(
        store: Arc<dyn BannerStore>,
        sink: Arc<dyn ImageSink>,
        locks: Arc<IdLocks>,
    ) -> Self {
        Self { store, sink, locks }
    }

    pub async fn handle(&self, id: BannerId) -> Result<Banner, BannerStoreError> {
        let _guard = self.locks.lock(id).await;
        let removed = self.store.remove_by_id(id).await?;
        if removed.has_image() {
            if let Err(err) = self.sink.remove(&removed.image).await {
                tracing::warn!(id, image = %removed.image, error = %err, "failed to remove banner image");
            }
        }
        Ok(removed)
    }
}
