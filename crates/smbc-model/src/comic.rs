use serde::{Deserialize, Serialize};

/// Placeholder used for a title or date the page did not provide.
pub const UNKNOWN: &str = "unknown";

/// One comic as extracted from the publisher's front page.
///
/// A record only exists when the image URL was found; the remaining
/// fields fall back to [`UNKNOWN`] (title, date) or the empty string
/// (hover text) when the page omits them. Fields are fixed at
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComicRecord {
    image_url: String,
    title: String,
    date: String,
    hover_text: String,
}

impl ComicRecord {
    /// Build a record. A `None` title or date becomes [`UNKNOWN`].
    pub fn new(
        image_url: impl Into<String>,
        title: Option<String>,
        date: Option<String>,
        hover_text: impl Into<String>,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            title: title.unwrap_or_else(|| UNKNOWN.to_string()),
            date: date.unwrap_or_else(|| UNKNOWN.to_string()),
            hover_text: hover_text.into(),
        }
    }

    /// Image source exactly as it appears in the page. May be
    /// protocol-relative (`//cdn.example/...`).
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Publish date as rendered by the site, e.g. "March 3rd, 2024".
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The image's `title` attribute; empty when absent.
    pub fn hover_text(&self) -> &str {
        &self.hover_text
    }

    /// File extension for the archived image: everything after the last
    /// `.` in the image URL.
    ///
    /// This is a plain split of the whole URL, so a query string holding a
    /// dot (`comic.png?v=1.2`) yields `2`, and a URL without any dot yields
    /// the URL itself.
    pub fn image_extension(&self) -> &str {
        self.image_url.rsplit('.').next().unwrap_or(&self.image_url)
    }
}
