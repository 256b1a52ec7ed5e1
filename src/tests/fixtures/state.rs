use std::sync::Arc;

use crate::modules::banners::adapters::outbound::banner_store_in_memory::InMemoryBannerStore;
use crate::shared::infrastructure::image_sink::in_memory::InMemoryImageSink;
use crate::shell::state::AppState;

pub const TEST_MAX_UPLOAD_BYTES: usize = 1024;

pub struct TestState {
    pub state: AppState,
    pub store: Arc<InMemoryBannerStore>,
    pub sink: Arc<InMemoryImageSink>,
}

pub fn make_test_state() -> TestState {
    make_test_state_with_sink(InMemoryImageSink::new())
}

pub fn make_test_state_with_sink(sink: InMemoryImageSink) -> TestState {
    let store = Arc::new(InMemoryBannerStore::new());
    let sink = Arc::new(sink);
    TestState {
        state: AppState::new(store.clone(), sink.clone(), TEST_MAX_UPLOAD_BYTES),
        store,
        sink,
    }
}
