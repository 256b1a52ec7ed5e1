use axum::body::Bytes;

use crate::modules::banners::core::banner::Banner;

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content: Bytes,
}

/// Full replacement of a banner plus the image it should reference. The
/// `image` field of `banner` is ignored; it is set from the stored upload.
#[derive(Debug, Clone)]
pub struct SaveBanner {
    pub banner: Banner,
    pub image: ImageUpload,
}
