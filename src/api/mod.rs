pub mod image;
pub mod page;

use axum::{body::Bytes, extract::Multipart};
use utoipa::ToSchema;

use crate::error::ApiError;

pub use image::{
    handle_convert, handle_delete, handle_download, handle_render, handle_upload, UploadResponse,
    __path_handle_convert, __path_handle_delete, __path_handle_download, __path_handle_render,
    __path_handle_upload,
};
pub use page::{handle_index, handle_script, handle_style};

/// Multipart form accepted by the upload endpoints
#[derive(Debug, ToSchema)]
pub struct UploadForm {
    /// Image file (PNG, JPEG, GIF or WebP)
    #[schema(value_type = String)]
    pub image: Bytes,
    /// Session id of the image this upload replaces
    pub replaces: Option<String>,
}

impl UploadForm {
    /// Read the `image` and `replaces` fields, ignoring anything else
    pub async fn from_multipart(
        mut multipart: Multipart,
        max_upload_bytes: usize,
    ) -> Result<Self, ApiError> {
        let mut image = None;
        let mut replaces = None;

        let multipart_error = |e: axum::extract::multipart::MultipartError| {
            if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge {
                    max: max_upload_bytes,
                }
            } else {
                ApiError::BadRequest(format!("Multipart error: {}", e.body_text()))
            }
        };

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "image" => {
                    let bytes = field.bytes().await.map_err(multipart_error)?;
                    image = Some(bytes);
                }
                "replaces" => {
                    let text = field.text().await.map_err(multipart_error)?;
                    let text = text.trim();
                    if !text.is_empty() {
                        replaces = Some(text.to_string());
                    }
                }
                other => {
                    tracing::debug!(field = other, "Ignoring unknown multipart field");
                }
            }
        }

        let image = image.ok_or_else(|| ApiError::BadRequest("No image field found".to_string()))?;
        if image.len() > max_upload_bytes {
            return Err(ApiError::PayloadTooLarge {
                max: max_upload_bytes,
            });
        }

        Ok(Self { image, replaces })
    }
}
