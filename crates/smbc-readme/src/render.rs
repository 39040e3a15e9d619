use crate::scan::LatestComic;

const HEADING: &str = "# SMBC Daily";
const FOOTER: &str = "*This README is automatically updated with the latest SMBC comic.*";

/// Render the README for the newest comic.
///
/// The date comes from the metadata file, falling back to the directory
/// name. The hover text line is only included when non-empty.
pub fn render_readme(comic: &LatestComic) -> String {
    let publish_date = comic.metadata.date().unwrap_or(comic.date_dir.as_str());
    let hover_text = comic.metadata.hover_text().unwrap_or_default();
    let title = &comic.title;

    let mut readme = format!(
        "{HEADING}\n\n\
         #### {publish_date}\n\n\
         ## {title}\n\n\
         ![{title}]({})\n\n",
        comic.image_path
    );

    if !hover_text.is_empty() {
        readme.push_str(&format!("**Hover Text:** {hover_text}\n\n"));
    }

    readme.push_str(&format!("---\n\n{FOOTER}\n"));
    readme
}
