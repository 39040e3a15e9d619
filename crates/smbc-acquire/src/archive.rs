use crate::error::AcquireError;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use smbc_model::{metadata_filename, render_metadata, ComicRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// Default archive root, relative to the project root.
pub const ARCHIVE_DIR: &str = "archive";

/// Format of the per-day directory names.
pub const DATE_DIR_FORMAT: &str = "%Y-%m-%d";

/// A comic that has been written to its daily directory.
#[derive(Debug, Clone, Serialize)]
pub struct ArchivedComic {
    pub record: ComicRecord,
    pub directory: PathBuf,
    pub image_path: PathBuf,
    pub metadata_path: PathBuf,
}

/// Create (if needed) and return today's directory:
/// `<project_root>/<archive_dir>/<YYYY-MM-DD>`.
pub fn daily_directory(project_root: &Path, archive_dir: &str) -> Result<PathBuf, AcquireError> {
    daily_directory_for(project_root, archive_dir, Local::now().date_naive())
}

/// Same as [`daily_directory`] for an explicit date. Calling it again for a
/// directory that already exists is not an error.
pub fn daily_directory_for(
    project_root: &Path,
    archive_dir: &str,
    date: NaiveDate,
) -> Result<PathBuf, AcquireError> {
    let dir = project_root
        .join(archive_dir)
        .join(date.format(DATE_DIR_FORMAT).to_string());

    fs::create_dir_all(&dir).map_err(|source| {
        tracing::error!(path = %dir.display(), error = %source, "Error creating daily directory");
        AcquireError::persistence(&dir, source)
    })?;
    tracing::debug!(path = %dir.display(), "Daily directory ready");

    Ok(dir)
}

/// Write the image bytes to `<dir>/<base>.<extension>`.
pub fn save_image(
    dir: &Path,
    base: &str,
    extension: &str,
    image: &[u8],
) -> Result<PathBuf, AcquireError> {
    let path = dir.join(format!("{base}.{extension}"));
    write_file(&path, image)?;
    tracing::info!(path = %path.display(), bytes = image.len(), "Wrote comic image");
    Ok(path)
}

/// Write the four-line metadata block to `<dir>/<base>_metadata.txt`.
pub fn save_metadata(dir: &Path, base: &str, record: &ComicRecord) -> Result<PathBuf, AcquireError> {
    let path = dir.join(metadata_filename(base));
    write_file(&path, render_metadata(record).as_bytes())?;
    tracing::info!(path = %path.display(), "Wrote comic metadata");
    Ok(path)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), AcquireError> {
    fs::write(path, contents).map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "Error saving file");
        AcquireError::persistence(path, source)
    })
}
