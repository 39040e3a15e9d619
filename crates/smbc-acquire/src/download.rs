use crate::error::AcquireError;
use crate::fetch;
use reqwest::Client;

/// Resolve a protocol-relative (`//host/path`) image URL against `scheme`.
/// Anything else is returned unchanged.
pub fn resolve_image_url(image_url: &str, scheme: &str) -> String {
    if image_url.starts_with("//") {
        format!("{scheme}:{image_url}")
    } else {
        image_url.to_string()
    }
}

/// Download the comic image and return its raw bytes.
///
/// `image_url` is the URL as extracted from the page; protocol-relative
/// URLs are resolved with `scheme` first.
pub async fn download_image(
    client: &Client,
    image_url: &str,
    scheme: &str,
) -> Result<Vec<u8>, AcquireError> {
    let url = resolve_image_url(image_url, scheme);
    let bytes = async { fetch::get(client, &url).await?.bytes().await }.await;

    match bytes {
        Ok(bytes) => {
            tracing::info!(url = %url, bytes = bytes.len(), "Downloaded image");
            Ok(bytes.to_vec())
        }
        Err(source) => {
            tracing::error!(url = %url, error = %source, "Error downloading image");
            Err(AcquireError::Download { url, source })
        }
    }
}
