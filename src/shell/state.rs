use std::sync::Arc;

use crate::modules::banners::core::id_locks::IdLocks;
use crate::modules::banners::core::ports::BannerStore;
use crate::modules::banners::use_cases::remove_banner::handler::RemoveBannerHandler;
use crate::modules::banners::use_cases::save_banner::handler::SaveBannerHandler;
use crate::shared::infrastructure::image_sink::ImageSink;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BannerStore>,
    pub save_handler: Arc<SaveBannerHandler>,
    pub remove_handler: Arc<RemoveBannerHandler>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        store: Arc<dyn BannerStore>,
        sink: Arc<dyn ImageSink>,
        max_upload_bytes: usize,
    ) -> Self {
        let locks = Arc::new(IdLocks::new());
        Self {
            save_handler: Arc::new(SaveBannerHandler::with_locks(
                store.clone(),
                sink.clone(),
                locks.clone(),
            )),
            remove_handler: Arc::new(RemoveBannerHandler::with_locks(store.clone(), sink, locks)),
            store,
            max_upload_bytes,
        }
    }
}
