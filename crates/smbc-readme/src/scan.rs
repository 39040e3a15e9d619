use crate::SummaryError;
use smbc_model::{metadata_filename, ComicMetadata};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Only images with this extension are picked up from a date directory.
pub const IMAGE_EXTENSION: &str = "png";

/// The newest comic found in the archive.
#[derive(Debug, Clone)]
pub struct LatestComic {
    /// Name of the date directory, e.g. `2024-03-03`.
    pub date_dir: String,
    /// Image file name without extension.
    pub title: String,
    /// Image path relative to the project root, `/`-separated, with spaces
    /// encoded as `%20` so it can be embedded in Markdown.
    pub image_path: String,
    /// Contents of the companion metadata file; empty if there is none.
    pub metadata: ComicMetadata,
}

/// Locate the newest comic under `<project_root>/<data_dir>`.
///
/// Date directories are compared as strings, which orders `YYYY-MM-DD`
/// names chronologically. Within the chosen directory the first `.png`
/// by name wins.
pub fn find_latest_comic(project_root: &Path, data_dir: &str) -> Result<LatestComic, SummaryError> {
    let data_root = project_root.join(data_dir);
    if !data_root.exists() {
        return Err(SummaryError::MissingDataDir(data_root));
    }

    let mut date_dirs: Vec<String> = fs::read_dir(&data_root)
        .map_err(|e| SummaryError::io(&data_root, e))?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    date_dirs.sort_unstable_by(|a, b| b.cmp(a));

    let date_dir = date_dirs
        .into_iter()
        .next()
        .ok_or_else(|| SummaryError::NoDateDirectories(data_root.clone()))?;
    let comic_dir = data_root.join(&date_dir);
    tracing::debug!(path = %comic_dir.display(), "Most recent date directory");

    let mut images: Vec<String> = fs::read_dir(&comic_dir)
        .map_err(|e| SummaryError::io(&comic_dir, e))?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_image(name))
        .collect();
    images.sort_unstable();

    let image_name = images
        .into_iter()
        .next()
        .ok_or_else(|| SummaryError::NoImages(comic_dir.clone()))?;
    let title = Path::new(&image_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let metadata_path = comic_dir.join(metadata_filename(&title));
    let metadata = if metadata_path.exists() {
        let text = fs::read_to_string(&metadata_path)
            .map_err(|e| SummaryError::io(&metadata_path, e))?;
        ComicMetadata::parse(&text)
    } else {
        tracing::warn!(path = %metadata_path.display(), "No metadata file for comic");
        ComicMetadata::default()
    };

    let image_path =
        markdown_path(&relative_to_root(project_root, &comic_dir.join(&image_name))?);

    Ok(LatestComic {
        date_dir,
        title,
        image_path,
        metadata,
    })
}

/// `*.png`, excluding dot-files.
fn is_image(name: &str) -> bool {
    !name.starts_with('.')
        && Path::new(name)
            .extension()
            .is_some_and(|ext| ext == IMAGE_EXTENSION)
}

/// `path` relative to `project_root`, stepping out with `..` when it lies
/// elsewhere. Both are resolved lexically against the current directory;
/// symlinks are not followed.
fn relative_to_root(project_root: &Path, path: &Path) -> Result<PathBuf, SummaryError> {
    let root = absolute(project_root)?;
    let path = absolute(path)?;

    let root_parts: Vec<Component> = root.components().collect();
    let path_parts: Vec<Component> = path.components().collect();
    let shared = root_parts
        .iter()
        .zip(&path_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..root_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[shared..] {
        relative.push(part);
    }
    Ok(relative)
}

fn absolute(path: &Path) -> Result<PathBuf, SummaryError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| SummaryError::io(path, e))?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for part in joined.components() {
        match part {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

fn markdown_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
        .replace(' ', "%20")
}
