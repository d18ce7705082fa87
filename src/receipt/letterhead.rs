//! Letterhead preloading.
//!
//! Every configured letterhead image must be available before the receipt is
//! rendered. Downloads run concurrently; the first failure aborts the batch.
//! There is no timeout and no retry.

use futures::future::try_join_all;

use super::GeneratorError;

/// A downloaded letterhead image, ready to be written next to the Typst source.
#[derive(Debug, Clone)]
pub struct LetterheadImage {
    pub url: String,
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

impl LetterheadImage {
    /// File name used inside the render directory.
    pub fn file_name(&self, index: usize) -> String {
        format!("membrete-{}.{}", index, self.extension)
    }
}

/// Download all `urls`, preserving their order.
pub async fn preload_images(
    client: &reqwest::Client,
    urls: &[String],
) -> Result<Vec<LetterheadImage>, GeneratorError> {
    try_join_all(urls.iter().map(|url| fetch_image(client, url))).await
}

async fn fetch_image(client: &reqwest::Client, url: &str) -> Result<LetterheadImage, GeneratorError> {
    let to_error = |source| GeneratorError::Letterhead {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(to_error)?;

    let extension = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(extension_for)
        .unwrap_or("png");

    let bytes = response.bytes().await.map_err(to_error)?;
    log::debug!("Loaded letterhead {} ({} bytes)", url, bytes.len());

    Ok(LetterheadImage {
        url: url.to_string(),
        bytes: bytes.to_vec(),
        extension,
    })
}

fn extension_for(content_type: &str) -> &'static str {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    match mime {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/svg+xml" => "svg",
        "image/gif" => "gif",
        _ => "png",
    }
}
