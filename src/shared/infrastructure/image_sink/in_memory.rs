// In memory implementation of the ImageSink port.
//
// Purpose
// - Drive use case and HTTP tests without touching the filesystem.
// - Simulate storage outages with `toggle_offline`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::shared::core::primitives::BannerId;
use crate::shared::infrastructure::image_sink::{ImageSink, ImageSinkError, stored_file_name};

#[derive(Default)]
pub struct InMemoryImageSink {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
    is_offline: bool,
}

impl InMemoryImageSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn get(&self, file_name: &str) -> Option<Vec<u8>> {
        self.blobs.read().await.get(file_name).cloned()
    }

    pub async fn file_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.blobs.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl ImageSink for InMemoryImageSink {
    async fn store(
        &self,
        content: &[u8],
        record_id: BannerId,
        original_file_name: &str,
    ) -> Result<String, ImageSinkError> {
        if self.is_offline {
            return Err(ImageSinkError::Backend("Image sink offline".into()));
        }

        let file_name = stored_file_name(record_id, original_file_name);
        self.blobs
            .write()
            .await
            .insert(file_name.clone(), content.to_vec());
        Ok(file_name)
    }

    async fn remove(&self, file_name: &str) -> Result<(), ImageSinkError> {
        if self.is_offline {
            return Err(ImageSinkError::Backend("Image sink offline".into()));
        }

        self.blobs.write().await.remove(file_name);
        Ok(())
    }
}
