use crate::comic::ComicRecord;
use std::collections::HashMap;

pub const TITLE_KEY: &str = "Title";
pub const DATE_KEY: &str = "Date";
pub const HOVER_TEXT_KEY: &str = "Hover Text";
pub const IMAGE_URL_KEY: &str = "Image URL";

/// Suffix appended to an image's base name to form its metadata file name.
pub const METADATA_SUFFIX: &str = "_metadata.txt";

/// Name of the metadata file that accompanies `<base>.<ext>`.
pub fn metadata_filename(base: &str) -> String {
    format!("{base}{METADATA_SUFFIX}")
}

/// Render the four-line metadata block stored next to each archived image.
///
/// Values are written as-is. A value containing a newline spills onto an
/// extra line, and [`ComicMetadata::parse`] trims surrounding whitespace,
/// so only single-line values without edge whitespace read back unchanged.
///
/// ```text
/// Title: <title>
/// Date: <date>
/// Hover Text: <hover text>
/// Image URL: <image url>
/// ```
pub fn render_metadata(record: &ComicRecord) -> String {
    format!(
        "{TITLE_KEY}: {}\n\
         {DATE_KEY}: {}\n\
         {HOVER_TEXT_KEY}: {}\n\
         {IMAGE_URL_KEY}: {}\n",
        record.title(),
        record.date(),
        record.hover_text(),
        record.image_url(),
    )
}

/// Key/value pairs read back from a metadata file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComicMetadata {
    fields: HashMap<String, String>,
}

impl ComicMetadata {
    /// Parse `key: value` lines. Only the first colon splits, so values may
    /// contain colons; keys and values are trimmed and lines without a colon
    /// are skipped. Later duplicates win.
    pub fn parse(text: &str) -> Self {
        let fields = text
            .lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn date(&self) -> Option<&str> {
        self.get(DATE_KEY)
    }

    pub fn hover_text(&self) -> Option<&str> {
        self.get(HOVER_TEXT_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn todays_comic() -> ComicRecord {
        ComicRecord::new(
            "//cdn.example/c/today.png",
            Some("Today's Comic".into()),
            Some("March 3rd, 2024".into()),
            "funny",
        )
    }

    fn with_hover_text(hover_text: &str) -> ComicRecord {
        ComicRecord::new("https://x.com/c.png", None, None, hover_text)
    }

    #[test]
    fn test_render_metadata_exact() {
        let text = render_metadata(&todays_comic());
        assert_eq!(
            text,
            "Title: Today's Comic\n\
             Date: March 3rd, 2024\n\
             Hover Text: funny\n\
             Image URL: //cdn.example/c/today.png\n"
        );
    }

    #[test]
    fn test_render_metadata_empty_hover_text() {
        let text = render_metadata(&with_hover_text(""));
        assert!(text.contains("Hover Text: \n"));
        assert!(text.starts_with("Title: unknown\nDate: unknown\n"));
    }

    #[test]
    fn test_metadata_round_trip() {
        let record = ComicRecord::new(
            "https://x.com/c.png",
            None,
            Some("March 3rd, 2024".into()),
            "Ratio: 3:2, or so they say",
        );
        let parsed = ComicMetadata::parse(&render_metadata(&record));

        assert_eq!(parsed.date(), Some("March 3rd, 2024"));
        assert_eq!(parsed.hover_text(), Some("Ratio: 3:2, or so they say"));
        assert_eq!(parsed.get(IMAGE_URL_KEY), Some("https://x.com/c.png"));
    }

    #[test]
    fn test_hover_text_edge_whitespace_is_trimmed() {
        let parsed = ComicMetadata::parse(&render_metadata(&with_hover_text(" funny ")));
        assert_eq!(parsed.hover_text(), Some("funny"));
    }

    #[test]
    fn test_hover_text_newline_spills_onto_extra_line() {
        let text = render_metadata(&with_hover_text("line one\nline two"));
        assert_eq!(text.lines().count(), 5);

        let parsed = ComicMetadata::parse(&text);
        assert_eq!(parsed.hover_text(), Some("line one"));
        assert_eq!(parsed.get(IMAGE_URL_KEY), Some("https://x.com/c.png"));
    }

    #[test]
    fn test_parse_skips_lines_without_colon() {
        let parsed = ComicMetadata::parse("no separator here\n  Date :  today  \n");
        assert_eq!(parsed.date(), Some("today"));
        assert_eq!(parsed.get("no separator here"), None);
    }

    #[test]
    fn test_parse_empty() {
        assert!(ComicMetadata::parse("").is_empty());
    }

    #[test]
    fn test_metadata_filename() {
        assert_eq!(metadata_filename("smbc_comic"), "smbc_comic_metadata.txt");
    }

    // Single-line values, possibly empty, with no whitespace at either end.
    const VALUE: &str = "([A-Za-z0-9,.:;!?'\"()-]([A-Za-z0-9 ,.:;!?'\"()-]{0,30}[A-Za-z0-9,.:;!?'\"()-])?)?";

    proptest! {
        #[test]
        fn prop_date_and_hover_text_round_trip(date in VALUE, hover_text in VALUE) {
            let record = ComicRecord::new("//cdn.example/c/x.png", None, Some(date.clone()), hover_text.clone());
            let text = render_metadata(&record);
            prop_assert_eq!(text.lines().count(), 4);

            let parsed = ComicMetadata::parse(&text);
            prop_assert_eq!(parsed.date(), Some(date.as_str()));
            prop_assert_eq!(parsed.hover_text(), Some(hover_text.as_str()));
        }
    }
}
