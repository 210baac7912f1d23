use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::UploadForm;
use crate::error::ApiError;
use crate::models::ParamQuery;
use crate::rendering::DOWNLOAD_FILENAME;
use crate::server::AppState;
use crate::services::RenderedPng;

/// Response to an image upload
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Status code (200 = success)
    pub status: u16,
    /// Session id used by the render, download and delete endpoints
    pub id: String,
    /// Uploaded image width in pixels
    pub width: u32,
    /// Uploaded image height in pixels
    pub height: u32,
    /// Width of rendered output (longer side capped at 640)
    pub working_width: u32,
    /// Height of rendered output
    pub working_height: u32,
}

/// Upload an image
///
/// Decodes the image and keeps it for repeated renders. Passing the id of
/// a previous upload in `replaces` releases that one.
#[utoipa::path(
    post,
    path = "/api/image",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = UploadResponse),
        (status = 400, description = "Missing field or undecodable image"),
        (status = 413, description = "Upload too large"),
    ),
    tag = "Images"
)]
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let form = UploadForm::from_multipart(multipart, state.config.max_upload_bytes).await?;

    let decoded = state.renderer.decode(form.image.clone()).await?;
    let (width, height) = (decoded.width, decoded.height);
    let (working_width, working_height) = (decoded.working.width(), decoded.working.height());

    let session = state
        .sessions
        .insert(&form.image, decoded.working, form.replaces.as_deref())
        .await;

    Ok(Json(UploadResponse {
        status: 200,
        id: session.id,
        width,
        height,
        working_width,
        working_height,
    }))
}

/// Render an uploaded image
///
/// Returns the dot pattern as PNG. Missing or malformed parameters fall
/// back to the configured defaults.
#[utoipa::path(
    get,
    path = "/api/image/{id}/render",
    params(
        ("id" = String, Path, description = "Session id from the upload"),
        ParamQuery,
    ),
    responses(
        (status = 200, description = "Rendered PNG"),
        (status = 404, description = "Unknown or expired session"),
    ),
    tag = "Images"
)]
pub async fn handle_render(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ParamQuery>,
) -> Result<Response, ApiError> {
    let rendered = render_session(&state, &id, &query).await?;
    Ok(png_response(rendered, false))
}

/// Download a rendered image
///
/// Same as render, but served as an attachment named `doticon.png`.
#[utoipa::path(
    get,
    path = "/api/image/{id}/download",
    params(
        ("id" = String, Path, description = "Session id from the upload"),
        ParamQuery,
    ),
    responses(
        (status = 200, description = "Rendered PNG attachment"),
        (status = 404, description = "Unknown or expired session"),
    ),
    tag = "Images"
)]
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ParamQuery>,
) -> Result<Response, ApiError> {
    let rendered = render_session(&state, &id, &query).await?;
    tracing::info!(session = %id, width = rendered.width, height = rendered.height, "Download");
    Ok(png_response(rendered, true))
}

/// Release an uploaded image
#[utoipa::path(
    delete,
    path = "/api/image/{id}",
    params(("id" = String, Path, description = "Session id from the upload")),
    responses(
        (status = 204, description = "Session released"),
        (status = 404, description = "Unknown or expired session"),
    ),
    tag = "Images"
)]
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.remove(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// Convert an image in one request
///
/// Uploads, renders and returns the PNG attachment without keeping a
/// session.
#[utoipa::path(
    post,
    path = "/api/convert",
    params(ParamQuery),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Rendered PNG attachment"),
        (status = 400, description = "Missing field or undecodable image"),
        (status = 413, description = "Upload too large"),
    ),
    tag = "Images"
)]
pub async fn handle_convert(
    State(state): State<AppState>,
    Query(query): Query<ParamQuery>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = UploadForm::from_multipart(multipart, state.config.max_upload_bytes).await?;
    let decoded = state.renderer.decode(form.image).await?;
    let params = query.resolve(&state.config.defaults);

    let rendered = state
        .renderer
        .render_png(Arc::new(decoded.working), params)
        .await?;
    tracing::info!(width = rendered.width, height = rendered.height, dots = rendered.dots, "Converted image");

    Ok(png_response(rendered, true))
}

async fn render_session(
    state: &AppState,
    id: &str,
    query: &ParamQuery,
) -> Result<RenderedPng, ApiError> {
    let session = state.sessions.get(id).await.ok_or(ApiError::NotFound)?;
    let params = query.resolve(&state.config.defaults);

    tracing::debug!(
        session = id,
        dot_radius = params.dot_radius,
        spacing = params.spacing,
        use_source_color = params.use_source_color,
        "Rendering session"
    );

    Ok(state.renderer.render_png(session.image, params).await?)
}

fn png_response(rendered: RenderedPng, attachment: bool) -> Response {
    let mut response = (
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        rendered.png_bytes,
    )
        .into_response();

    if attachment {
        let disposition = format!("attachment; filename=\"{DOWNLOAD_FILENAME}\"");
        if let Ok(value) = HeaderValue::from_str(&disposition) {
            response
                .headers_mut()
                .insert(header::CONTENT_DISPOSITION, value);
        }
    }

    response
}
