//! Output directory handling.
//!
//! The output directory belongs to the generator: every entry in it is
//! removed before a build, subdirectories included.

use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list output directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove {}", path.display())]
    RemoveEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Create the output directory, or empty it if it already exists.
///
/// Returns the number of entries removed.
pub fn prepare_output_dir(dir: &Path) -> Result<usize, OutputError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        return Ok(0);
    }

    let read_dir_err = |source| OutputError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut removed = 0;
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        let result = if is_dir {
            std::fs::remove_dir_all(&path)
        } else {
            std::fs::remove_file(&path)
        };
        result.map_err(|source| OutputError::RemoveEntry {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("removed stale output {}", path.display());
        removed += 1;
    }

    Ok(removed)
}

/// Write one page into the output directory, replacing any existing file.
pub fn write_page(dir: &Path, file_name: &str, html: &str) -> Result<PathBuf, OutputError> {
    let path = dir.join(file_name);
    std::fs::write(&path, html).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_prepare_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("site/pages");

        assert_eq!(prepare_output_dir(&output).unwrap(), 0);
        assert!(output.is_dir());
    }

    #[test]
    fn test_prepare_clears_files_and_subdirs() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path();
        fs::write(output.join("old.html"), "stale").unwrap();
        fs::write(output.join("notes.txt"), "unrelated").unwrap();
        fs::create_dir_all(output.join("assets/img")).unwrap();
        fs::write(output.join("assets/img/logo.png"), "png").unwrap();

        assert_eq!(prepare_output_dir(output).unwrap(), 3);
        assert_eq!(fs::read_dir(output).unwrap().count(), 0);
    }

    #[test]
    fn test_prepare_leaves_siblings_alone() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output");
        fs::create_dir(&output).unwrap();
        fs::write(dir.path().join("movies.csv"), "1,A,2000,B,C").unwrap();

        prepare_output_dir(&output).unwrap();
        assert!(dir.path().join("movies.csv").exists());
    }

    #[test]
    fn test_write_page_overwrites() {
        let dir = tempfile::tempdir().unwrap();

        write_page(dir.path(), "Heat - 2.html", "first").unwrap();
        let path = write_page(dir.path(), "Heat - 2.html", "second").unwrap();

        assert_eq!(path, dir.path().join("Heat - 2.html"));
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_write_page_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        let err = write_page(&missing, "x.html", "x").unwrap_err();
        assert!(matches!(err, OutputError::Write { .. }));
        assert_eq!(
            err.to_string(),
            format!("failed to write {}", missing.join("x.html").display())
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
