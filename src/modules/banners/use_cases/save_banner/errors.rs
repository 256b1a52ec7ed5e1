use thiserror::Error;

use crate::modules::banners::core::ports::BannerStoreError;
use crate::shared::infrastructure::image_sink::ImageSinkError;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("malformed multipart body: {0}")]
    Multipart(String),

    #[error("payload exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("missing form field `{0}`")]
    MissingField(&'static str),

    #[error(transparent)]
    Storage(#[from] ImageSinkError),
}

#[derive(Debug, Error)]
pub enum SaveBannerError {
    #[error(transparent)]
    NotFound(#[from] BannerStoreError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}
