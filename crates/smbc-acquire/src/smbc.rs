use crate::archive::{self, ArchivedComic};
use crate::download;
use crate::error::AcquireError;
use crate::extract::{self, PageLayout};
use crate::fetch;
use crate::sanitize;
use std::path::Path;

/// Front page; always shows the newest comic.
pub const BASE_URL: &str = "https://www.smbc-comics.com/";

/// Base file name used when the comic's title is unknown.
pub const FALLBACK_BASE_NAME: &str = "smbc_comic";

#[derive(Debug, Clone)]
pub struct AcquireConfig {
    /// Page to scrape.
    pub url: String,
    pub user_agent: String,
    pub layout: PageLayout,
    pub fallback_base_name: String,
    /// Scheme given to protocol-relative image URLs.
    pub asset_scheme: String,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            url: BASE_URL.to_string(),
            user_agent: fetch::USER_AGENT.to_string(),
            layout: PageLayout::default(),
            fallback_base_name: FALLBACK_BASE_NAME.to_string(),
            asset_scheme: "https".to_string(),
        }
    }
}

/// Download the current comic into `target_dir`.
///
/// Fetches the front page, extracts the comic record, downloads the image
/// and writes `<base>.<ext>` plus `<base>_metadata.txt`. Stops at the first
/// failing stage. Files already written are left in place if a later write
/// fails.
pub async fn acquire_current_comic(
    config: &AcquireConfig,
    target_dir: &Path,
) -> Result<ArchivedComic, AcquireError> {
    let client = fetch::http_client(&config.user_agent)?;

    tracing::info!(url = %config.url, "Fetching latest comic");
    let record = {
        let document = fetch::fetch_page(&client, &config.url).await?;
        extract::extract_comic(&document, &config.layout)?
    };

    let base = sanitize::base_filename(record.title(), &config.fallback_base_name);
    let image =
        download::download_image(&client, record.image_url(), &config.asset_scheme).await?;

    let image_path = archive::save_image(target_dir, &base, record.image_extension(), &image)?;
    let metadata_path = archive::save_metadata(target_dir, &base, &record)?;

    tracing::info!(
        title = %record.title(),
        date = %record.date(),
        "Successfully downloaded current comic"
    );

    Ok(ArchivedComic {
        record,
        directory: target_dir.to_path_buf(),
        image_path,
        metadata_path,
    })
}
