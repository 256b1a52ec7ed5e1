use async_trait::async_trait;
use thiserror::Error;

use crate::shared::core::primitives::BannerId;

#[derive(Debug, Error)]
pub enum ImageSinkError {
    #[error("image storage failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Blob storage for banner images. One blob per banner, named after the
/// banner id and the extension of the uploaded file.
#[async_trait]
pub trait ImageSink: Send + Sync {
    /// Writes `content` under the name derived from `record_id` and
    /// `original_file_name`, replacing any blob with that name. Returns the
    /// stored name.
    async fn store(
        &self,
        content: &[u8],
        record_id: BannerId,
        original_file_name: &str,
    ) -> Result<String, ImageSinkError>;

    /// Deletes a stored blob. Removing a blob that does not exist succeeds.
    async fn remove(&self, file_name: &str) -> Result<(), ImageSinkError>;
}

/// `<record_id><extension>`, where the extension is the suffix of the base
/// name starting at its last dot, as uploaded. Empty when there is no dot.
pub fn stored_file_name(record_id: BannerId, original_file_name: &str) -> String {
    let base = original_file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let extension = base.rfind('.').map(|dot| &base[dot..]).unwrap_or_default();
    format!("{record_id}{extension}")
}

pub mod filesystem;
pub mod in_memory;
