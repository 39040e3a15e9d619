use crate::error::AcquireError;
use reqwest::{Client, Response};
use scraper::Html;

pub const USER_AGENT: &str = "smbc-daily/0.1 (daily comic archiver)";

/// Build the HTTP client shared by the page fetch and the image download.
pub fn http_client(user_agent: &str) -> Result<Client, AcquireError> {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(AcquireError::Client)
}

/// GET `url`, turning non-2xx statuses into errors.
pub(crate) async fn get(client: &Client, url: &str) -> reqwest::Result<Response> {
    client.get(url).send().await?.error_for_status()
}

/// Fetch a page and parse the body as HTML.
pub async fn fetch_page(client: &Client, url: &str) -> Result<Html, AcquireError> {
    let body = async { get(client, url).await?.text().await }.await;

    match body {
        Ok(html) => {
            tracing::info!(url = %url, bytes = html.len(), "Received HTML");
            Ok(Html::parse_document(&html))
        }
        Err(source) => {
            tracing::error!(url = %url, error = %source, "Error fetching page");
            Err(AcquireError::Fetch {
                url: url.to_string(),
                source,
            })
        }
    }
}
