use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Failures while obtaining the input text
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("input file '{}' not found", .path.display())]
    SourceNotFound { path: PathBuf },
    #[error("input file '{}' is empty", .path.display())]
    EmptySource { path: PathBuf },
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the whole input file.
///
/// A file with zero bytes is an error; a file holding only whitespace or
/// separators is not, it simply yields no expressions.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SourceError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => SourceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if text.is_empty() {
        return Err(SourceError::EmptySource {
            path: path.to_path_buf(),
        });
    }

    debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expressions.txt");
        fs::write(&path, "1+2;3").unwrap();
        assert_eq!(read_source(&path).unwrap(), "1+2;3");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, SourceError::SourceNotFound { .. }));
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert!(matches!(
            read_source(&path),
            Err(SourceError::EmptySource { .. })
        ));
    }

    #[test]
    fn whitespace_only_is_not_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        fs::write(&path, " ;\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), " ;\n");
    }

    #[test]
    fn directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_source(dir.path()),
            Err(SourceError::Io { .. })
        ));
    }
}
