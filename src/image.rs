use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use reqwest::header::HeaderValue;
use url::Url;

use crate::errors::{DirlibError, Result};

/// Hard cap on embeddable image payloads.
pub const MAX_IMAGE_BYTES: usize = 1024 * 1024;

/// Encode raw image bytes as a self-contained `data:` URL.
///
/// The bytes must sniff as a known image format and stay within
/// [`MAX_IMAGE_BYTES`]; the result can be stored directly in a profile's
/// `photo` field.
pub fn ingest_bytes(bytes: &[u8]) -> Result<String> {
    let format = image::guess_format(bytes).map_err(|_| DirlibError::ImageType)?;
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(DirlibError::ImageTooLarge { size: bytes.len() });
    }

    Ok(format!(
        "data:{};base64,{}",
        mime_of(format),
        STANDARD.encode(bytes)
    ))
}

/// Read a file and ingest its content.
pub async fn ingest_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    ingest_bytes(&bytes)
}

/// Synchronized version of [`ingest_file`].
pub fn ingest_file_synced<P: AsRef<Path>>(path: P) -> Result<String> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(ingest_file(path))
}

/// Best-effort check that `url` points at image content.
///
/// Issues a HEAD request and inspects the `content-type` header. Any
/// parse, network, or protocol problem yields `false` rather than an
/// error.
pub async fn validate_image_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    let url = match Url::parse(url) {
        Ok(url) => url,
        Err(_) => return false,
    };

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        "User-Agent",
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64; rv:102.0) Gecko/20100101 Firefox/102.0",
        ),
    );
    let client = match reqwest::Client::builder()
        .default_headers(headers)
        .build()
    {
        Ok(client) => client,
        Err(_) => return false,
    };

    match client.head(url).send().await {
        Ok(response) => response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|content_type| content_type.starts_with("image/"))
            .unwrap_or(false),
        Err(_) => false,
    }
}

/// Synchronized version of [`validate_image_url`].
pub fn validate_image_url_synced(url: &str) -> bool {
    match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime.block_on(validate_image_url(url)),
        Err(_) => false,
    }
}

fn mime_of(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Ico => "image/x-icon",
        ImageFormat::Tiff => "image/tiff",
        ImageFormat::Avif => "image/avif",
        _ => "application/octet-stream",
    }
}
