use crate::error::AcquireError;
use scraper::{ElementRef, Html, Selector};
use smbc_model::ComicRecord;

/// CSS selectors locating each piece of the comic on the front page.
#[derive(Debug, Clone)]
pub struct PageLayout {
    /// Container holding the comic image. Required.
    pub comic_body: String,
    /// Image inside `comic_body`. Required, along with its `src`.
    pub image: String,
    /// Blog/news area carrying the title and date. Optional.
    pub blog_area: String,
    /// News header inside `blog_area`.
    pub news_header: String,
    /// Link inside `news_header` whose text is the title.
    pub title_link: String,
    /// Publish time inside `blog_area`.
    pub publish_time: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            comic_body: "div#cc-comicbody".into(),
            image: "img".into(),
            blog_area: "div#blogarea".into(),
            news_header: "div.cc-newsheader".into(),
            title_link: "a".into(),
            publish_time: "div.cc-publishtime".into(),
        }
    }
}

/// Extract the comic record from a parsed front page.
///
/// Missing comic body or image is a failure. A missing blog area, news
/// header, link or publish time only leaves the title/date as "unknown".
/// A lookup that cannot be carried out at all (a selector that does not
/// parse) fails the whole record, wherever in the chain it happens.
pub fn extract_comic(document: &Html, layout: &PageLayout) -> Result<ComicRecord, AcquireError> {
    let record = extract(document, layout);
    match &record {
        Ok(record) => tracing::info!(
            title = %record.title(),
            date = %record.date(),
            image_url = %record.image_url(),
            "Extracted comic data"
        ),
        Err(e) => tracing::error!("{e}"),
    }
    record
}

fn extract(document: &Html, layout: &PageLayout) -> Result<ComicRecord, AcquireError> {
    let root = document.root_element();

    let comic_body = select_first(root, &layout.comic_body)?
        .ok_or_else(|| AcquireError::Extraction("could not find comic div".into()))?;

    let image = select_first(comic_body, &layout.image)?;
    let image_url = image
        .and_then(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty())
        .ok_or_else(|| AcquireError::Extraction("could not find comic image".into()))?;
    let hover_text = image
        .and_then(|img| img.value().attr("title"))
        .unwrap_or_default();

    let (title, date) = match select_first(root, &layout.blog_area)? {
        Some(blog_area) => {
            let title = match select_first(blog_area, &layout.news_header)? {
                Some(header) => select_first(header, &layout.title_link)?.map(trimmed_text),
                None => None,
            };
            let date = select_first(blog_area, &layout.publish_time)?.map(trimmed_text);
            (title, date)
        }
        None => {
            tracing::debug!(selector = %layout.blog_area, "No blog area, title and date unknown");
            (None, None)
        }
    };

    Ok(ComicRecord::new(image_url, title, date, hover_text))
}

/// First descendant of `scope` matching `selector`.
///
/// `Ok(None)` means the node is absent; `Err` means the lookup itself
/// could not be performed.
fn select_first<'a>(
    scope: ElementRef<'a>,
    selector: &str,
) -> Result<Option<ElementRef<'a>>, AcquireError> {
    let parsed = Selector::parse(selector)
        .map_err(|e| AcquireError::Extraction(format!("invalid selector {selector:?}: {e}")))?;
    Ok(scope.select(&parsed).next())
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
