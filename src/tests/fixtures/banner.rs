// Shared test fixtures for banners and image uploads.

use axum::body::Bytes;

use crate::modules::banners::core::banner::Banner;
use crate::modules::banners::use_cases::save_banner::command::ImageUpload;
use crate::shared::core::primitives::BannerId;

pub struct BannerBuilder {
    inner: Banner,
}

impl Default for BannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BannerBuilder {
    pub fn new() -> Self {
        Self {
            inner: Banner {
                id: 0,
                title: "Spring sale".to_string(),
                content: "Up to 50% off".to_string(),
                button: "Shop now".to_string(),
                link: "https://shop.example/spring".to_string(),
                image: String::new(),
            },
        }
    }

    pub fn id(mut self, v: BannerId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn button(mut self, v: impl Into<String>) -> Self {
        self.inner.button = v.into();
        self
    }

    pub fn link(mut self, v: impl Into<String>) -> Self {
        self.inner.link = v.into();
        self
    }

    pub fn image(mut self, v: impl Into<String>) -> Self {
        self.inner.image = v.into();
        self
    }

    pub fn build(self) -> Banner {
        self.inner
    }
}

pub fn image_upload(file_name: &str, content: &'static [u8]) -> ImageUpload {
    ImageUpload {
        file_name: file_name.to_string(),
        content: Bytes::from_static(content),
    }
}

#[cfg(test)]
mod banner_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_builds_an_unsaved_banner_without_image() {
        let built = BannerBuilder::default().build();
        assert!(built.is_new());
        assert!(!built.has_image());
        assert_eq!(built.title, "Spring sale");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = BannerBuilder::new()
            .id(9)
            .title("t")
            .content("c")
            .button("b")
            .link("l")
            .image("9.png")
            .build();

        assert_eq!(
            custom,
            Banner {
                id: 9,
                title: "t".into(),
                content: "c".into(),
                button: "b".into(),
                link: "l".into(),
                image: "9.png".into(),
            }
        );
    }
}
