use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::banners::adapters::inbound::id_param::parse_form_id;
use crate::modules::banners::core::banner::Banner;
use crate::modules::banners::use_cases::save_banner::command::{ImageUpload, SaveBanner};
use crate::modules::banners::use_cases::save_banner::errors::{SaveBannerError, UploadError};
use crate::shell::state::AppState;

const IMAGE_FIELD: &str = "image";

/// Fields of the `banners.save` form. Unknown fields are skipped.
#[derive(Debug, Default)]
pub struct SaveBannerForm {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub button: String,
    pub link: String,
    pub image: Option<ImageUpload>,
}

pub async fn handle(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let form = match multipart {
        Ok(multipart) => read_form(multipart, state.max_upload_bytes).await,
        Err(rejection) => Err(UploadError::Multipart(rejection.body_text())),
    };
    let form = match form {
        Ok(form) => form,
        Err(err) => return upload_failure(&err),
    };

    let id = match parse_form_id(form.id.as_deref()) {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(error = %err, "rejected banner save");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };
    let Some(image) = form.image else {
        return upload_failure(&UploadError::MissingField(IMAGE_FIELD));
    };

    let command = SaveBanner {
        banner: Banner {
            id,
            title: form.title,
            content: form.content,
            button: form.button,
            link: form.link,
            image: String::new(),
        },
        image,
    };

    match state.save_handler.handle(command).await {
        Ok(saved) => Json(saved).into_response(),
        Err(SaveBannerError::NotFound(err)) => {
            tracing::warn!(error = %err, "banner save failed");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(SaveBannerError::Upload(err)) => upload_failure(&err),
    }
}

async fn read_form(mut multipart: Multipart, limit: usize) -> Result<SaveBannerForm, UploadError> {
    let mut form = SaveBannerForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| multipart_error(err, limit))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_owned();
            let content = field
                .bytes()
                .await
                .map_err(|err| multipart_error(err, limit))?;
            // An empty file input is submitted without name or content.
            if !(file_name.is_empty() && content.is_empty()) {
                form.image = Some(ImageUpload { file_name, content });
            }
            continue;
        }

        let slot = match name.as_str() {
            "id" => form.id.insert(String::new()),
            "title" => &mut form.title,
            "content" => &mut form.content,
            "button" => &mut form.button,
            "link" => &mut form.link,
            _ => continue,
        };
        *slot = field
            .text()
            .await
            .map_err(|err| multipart_error(err, limit))?;
    }
    Ok(form)
}

fn multipart_error(err: MultipartError, limit: usize) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::PayloadTooLarge { limit }
    } else {
        UploadError::Multipart(err.body_text())
    }
}

fn upload_failure(err: &UploadError) -> Response {
    let status = match err {
        UploadError::Multipart(_) | UploadError::MissingField(_) => StatusCode::BAD_REQUEST,
        UploadError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        UploadError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %err, "banner image upload failed");
    } else {
        tracing::warn!(error = %err, "rejected banner upload");
    }
    status.into_response()
}
