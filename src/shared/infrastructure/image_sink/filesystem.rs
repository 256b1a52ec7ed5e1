// Filesystem implementation of the ImageSink port.
//
// Responsibilities
// - Store one file per banner under a base directory.
// - Replace files atomically: content goes to a temporary file in the same
//   directory and is renamed over the target once fully written and synced.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::shared::core::primitives::BannerId;
use crate::shared::infrastructure::image_sink::{ImageSink, ImageSinkError, stored_file_name};

pub struct FilesystemImageSink {
    base_dir: PathBuf,
}

impl FilesystemImageSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub async fn ensure_base_dir(&self) -> Result<(), ImageSinkError> {
        tokio::fs::create_dir_all(&self.base_dir).await?;
        Ok(())
    }
}

#[async_trait]
impl ImageSink for FilesystemImageSink {
    async fn store(
        &self,
        content: &[u8],
        record_id: BannerId,
        original_file_name: &str,
    ) -> Result<String, ImageSinkError> {
        let file_name = stored_file_name(record_id, original_file_name);
        let target = self.base_dir.join(&file_name);

        // The temporary path deletes itself when dropped, so every early
        // return below leaves nothing behind.
        let (file, temp_path) = tempfile::Builder::new()
            .prefix(".upload-")
            .tempfile_in(&self.base_dir)?
            .into_parts();
        let mut file = tokio::fs::File::from_std(file);
        file.write_all(content).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        temp_path.persist(&target).map_err(|err| err.error)?;
        tracing::info!(%file_name, bytes = content.len(), "stored banner image");
        Ok(file_name)
    }

    async fn remove(&self, file_name: &str) -> Result<(), ImageSinkError> {
        match tokio::fs::remove_file(self.base_dir.join(file_name)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
