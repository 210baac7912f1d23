use dot_render::{RasterImage, RenderParams};
use std::sync::Arc;

use crate::error::ImageError;
use crate::rendering::{self, CanvasBackend, DecodedImage};

/// Encoded result of one render
#[derive(Debug)]
pub struct RenderedPng {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub dots: usize,
}

/// Runs decoding and rendering off the async runtime
///
/// Decoding a large photo and drawing thousands of dots are both CPU-bound,
/// so each call moves its work onto tokio's blocking pool.
#[derive(Clone)]
pub struct RenderService {
    backend: CanvasBackend,
    max_upload_bytes: usize,
}

impl RenderService {
    pub fn new(backend: CanvasBackend, max_upload_bytes: usize) -> Self {
        Self {
            backend,
            max_upload_bytes,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Decode an upload and reduce it to its working raster
    pub async fn decode<B>(&self, bytes: B) -> Result<DecodedImage, ImageError>
    where
        B: AsRef<[u8]> + Send + 'static,
    {
        let max = self.max_upload_bytes;
        run_blocking(move || rendering::decode_image_limited(bytes.as_ref(), max)).await
    }

    /// Render a working raster with the given parameters and encode it as PNG
    pub async fn render_png(
        &self,
        image: Arc<RasterImage>,
        params: RenderParams,
    ) -> Result<RenderedPng, ImageError> {
        let backend = self.backend;
        run_blocking(move || {
            let rendered = rendering::render_raster(&image, &params, backend)?;
            let png_bytes = rendering::encode_png(&rendered)?;
            Ok(RenderedPng {
                png_bytes,
                width: rendered.width(),
                height: rendered.height(),
                dots: rendered.dots().len(),
            })
        })
        .await
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, ImageError>
where
    F: FnOnce() -> Result<T, ImageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        ImageError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Render task failed: {e}"),
        ))
    })?
}

impl Default for RenderService {
    fn default() -> Self {
        Self::new(CanvasBackend::default(), 20 * 1024 * 1024)
    }
}
