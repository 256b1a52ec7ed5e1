use std::sync::Arc;

use crate::modules::banners::core::banner::Banner;
use crate::modules::banners::core::id_locks::IdLocks;
use crate::modules::banners::core::ports::BannerStore;
use crate::modules::banners::use_cases::save_banner::command::SaveBanner;
use crate::modules::banners::use_cases::save_banner::errors::{SaveBannerError, UploadError};
use crate::shared::core::primitives::BannerId;
use crate::shared::infrastructure::image_sink::ImageSink;

/// Stores the uploaded image, then commits the banner that references it.
///
/// The sink is only called outside the store lock. The banner's entry in
/// `IdLocks` is held from the image write to the cleanup, so saves and
/// removals of one banner never interleave. When the image cannot be stored
/// nothing is committed. When the commit fails after the image was stored,
/// the fresh blob is removed again on a best-effort basis.
pub struct SaveBannerHandler {
    store: Arc<dyn BannerStore>,
    sink: Arc<dyn ImageSink>,
    locks: Arc<IdLocks>,
}

impl SaveBannerHandler {
    pub fn new(store: Arc<dyn BannerStore>, sink: Arc<dyn ImageSink>) -> Self {
        Self::with_locks(store, sink, Arc::new(IdLocks::new()))
    }

    pub fn with_locks(
        store: Arc<dyn BannerStore>,
        sink: Arc<dyn ImageSink>,
        locks: Arc<IdLocks>,
    ) -> Self {
        Self { store, sink, locks }
    }

    pub async fn handle(&self, command: SaveBanner) -> Result<Banner, SaveBannerError> {
        let SaveBanner { mut banner, image } = command;

        // New banners need their id before the image is named after it.
        let reservation = if banner.is_new() {
            banner.id = self.store.reserve_id().await;
            Some(Reservation::new(self.store.clone(), banner.id))
        } else {
            None
        };

        let _guard = self.locks.lock(banner.id).await;
        let previous_image = match reservation {
            Some(_) => String::new(),
            None => self.store.get(banner.id).await?.image,
        };

        banner.image = match self
            .sink
            .store(&image.content, banner.id, &image.file_name)
            .await
        {
            Ok(stored) => stored,
            Err(err) => {
                if let Some(reservation) = reservation {
                    reservation.release().await;
                }
                return Err(UploadError::from(err).into());
            }
        };
        let stored_image = banner.image.clone();

        let committed = match reservation {
            Some(reservation) => {
                let committed = self.store.commit_reserved(banner).await;
                reservation.disarm();
                committed
            }
            None => self.store.upsert(banner).await,
        };

        match committed {
            Ok(saved) => {
                if !previous_image.is_empty() && previous_image != saved.image {
                    self.discard_image(&previous_image).await;
                }
                tracing::info!(id = saved.id, image = %saved.image, "saved banner");
                Ok(saved)
            }
            Err(err) => {
                self.discard_image(&stored_image).await;
                Err(err.into())
            }
        }
    }

    async fn discard_image(&self, file_name: &str) {
        if let Err(err) = self.sink.remove(file_name).await {
            tracing::warn!(%file_name, error = %err, "failed to remove stale banner image");
        }
    }
}

/// An id taken with `reserve_id` for a banner being created. Dropping it
/// while still armed (a cancelled save) releases the reservation in the
/// background.
struct Reservation {
    store: Arc<dyn BannerStore>,
    id: BannerId,
    armed: bool,
}

impl Reservation {
    fn new(store: Arc<dyn BannerStore>, id: BannerId) -> Self {
        Self {
            store,
            id,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }

    async fn release(mut self) {
        self.armed = false;
        self.store.release_reserved(self.id).await;
    }
}

impl Drop for Reservation {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(id = self.id, "leaked banner id reservation outside a runtime");
            return;
        };
        let store = self.store.clone();
        let id = self.id;
        runtime.spawn(async move { store.release_reserved(id).await });
    }
}
