use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod render;
pub mod scan;

pub use render::render_readme;
pub use scan::{find_latest_comic, LatestComic};

/// Archive root read by the README generator, relative to the project root.
///
/// Note this is not the `archive` directory the fetcher writes into; the two
/// have to be pointed at the same place explicitly.
pub const DATA_DIR: &str = "data";

pub const README_FILE: &str = "README.md";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("data directory not found: {}", .0.display())]
    MissingDataDir(PathBuf),

    #[error("no date directories found in {}", .0.display())]
    NoDateDirectories(PathBuf),

    #[error("no PNG files found in {}", .0.display())]
    NoImages(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SummaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub project_root: PathBuf,
    /// Archive root, relative to `project_root`.
    pub data_dir: String,
    /// README path, relative to `project_root`.
    pub readme: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            data_dir: DATA_DIR.to_string(),
            readme: README_FILE.to_string(),
        }
    }
}

impl SummaryConfig {
    pub fn readme_path(&self) -> PathBuf {
        self.project_root.join(&self.readme)
    }
}

/// Regenerate the README from the newest archived comic.
///
/// Nothing is written if no comic can be found.
pub fn update_readme(config: &SummaryConfig) -> Result<LatestComic, SummaryError> {
    let latest = find_latest_comic(&config.project_root, &config.data_dir).map_err(|e| {
        tracing::error!("{e}");
        e
    })?;

    let readme_path = config.readme_path();
    write_readme(&readme_path, &render_readme(&latest))?;
    tracing::info!(
        path = %readme_path.display(),
        title = %latest.title,
        "README updated"
    );

    Ok(latest)
}

fn write_readme(path: &Path, contents: &str) -> Result<(), SummaryError> {
    fs::write(path, contents).map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "Error writing README");
        SummaryError::io(path, source)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive_comic(root: &Path, date: &str, base: &str, metadata: Option<&str>) {
        let dir = root.join(DATA_DIR).join(date);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{base}.png")), b"png").unwrap();
        if let Some(metadata) = metadata {
            fs::write(dir.join(format!("{base}_metadata.txt")), metadata).unwrap();
        }
    }

    fn config(root: &Path) -> SummaryConfig {
        SummaryConfig {
            project_root: root.to_path_buf(),
            ..SummaryConfig::default()
        }
    }

    #[test]
    fn test_update_readme_writes_latest_comic() {
        let root = tempfile::tempdir().unwrap();
        archive_comic(
            root.path(),
            "2024-03-02",
            "Yesterday",
            Some("Title: Yesterday\nDate: March 2nd, 2024\nHover Text: old\n"),
        );
        archive_comic(
            root.path(),
            "2024-03-03",
            "Today's Comic",
            Some("Title: Today's Comic\nDate: March 3rd, 2024\nHover Text: funny\nImage URL: //cdn.example/c/today.png\n"),
        );

        let latest = update_readme(&config(root.path())).unwrap();
        assert_eq!(latest.title, "Today's Comic");

        let readme = fs::read_to_string(root.path().join("README.md")).unwrap();
        assert_eq!(
            readme,
            "# SMBC Daily\n\
             \n\
             #### March 3rd, 2024\n\
             \n\
             ## Today's Comic\n\
             \n\
             ![Today's Comic](data/2024-03-03/Today's%20Comic.png)\n\
             \n\
             **Hover Text:** funny\n\
             \n\
             ---\n\
             \n\
             *This README is automatically updated with the latest SMBC comic.*\n"
        );
    }

    #[test]
    fn test_update_readme_overwrites_previous() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("README.md"), "stale content that is longer than before").unwrap();
        archive_comic(root.path(), "2024-03-03", "comic", None);

        update_readme(&config(root.path())).unwrap();

        let readme = fs::read_to_string(root.path().join("README.md")).unwrap();
        assert!(readme.starts_with("# SMBC Daily\n"));
        assert!(!readme.contains("stale"));
    }

    #[test]
    fn test_update_readme_missing_data_dir_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let err = update_readme(&config(root.path())).unwrap_err();
        assert!(matches!(err, SummaryError::MissingDataDir(_)));
        assert!(!root.path().join("README.md").exists());
    }

    #[test]
    fn test_fetcher_archive_dir_is_not_read() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("archive").join("2024-03-03");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("comic.png"), b"png").unwrap();

        assert!(matches!(
            update_readme(&config(root.path())),
            Err(SummaryError::MissingDataDir(_))
        ));

        let pointed = SummaryConfig {
            data_dir: "archive".into(),
            ..config(root.path())
        };
        let latest = update_readme(&pointed).unwrap();
        assert_eq!(latest.image_path, "archive/2024-03-03/comic.png");
    }
}
