//! Document reading: the seam between the engine and format extraction.
//!
//! The engine never touches file formats directly; it consumes UTF-8 text
//! through [`DocumentReader`]. The bundled [`FsDocumentReader`] covers the
//! plain-text family; richer formats (PDF, DOCX, …) are handled by external
//! implementations of the trait.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File extensions the engine will pick up when walking a directory,
/// matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 11] = [
    "txt", "pdf", "doc", "docx", "ppt", "pptx", "xls", "xlsx", "htm", "html", "xml",
];

/// Extensions [`FsDocumentReader`] can read directly as UTF-8 text.
const PLAIN_TEXT_EXTENSIONS: [&str; 4] = ["txt", "htm", "html", "xml"];

/// Errors surfaced while reading a document.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The file does not exist.
    #[error("file not found: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The file's extension is not handled by this reader.
    #[error("unsupported extension: {path}")]
    UnsupportedExtension {
        /// The rejected path.
        path: PathBuf,
    },

    /// The file exists but its content could not be extracted as text.
    #[error("failed to extract text from {path}: {reason}")]
    Extraction {
        /// The unreadable path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Yields the plain text of a document given its path.
pub trait DocumentReader: Send + Sync {
    /// Read `path` and return its content as UTF-8 text.
    fn read(&self, path: &Path) -> Result<String, ReaderError>;
}

/// Lowercased extension of `path`, if any.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Whether `path` carries one of the supported extensions.
pub fn is_supported(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Filesystem reader for the plain-text document family.
///
/// Reads `txt`, `htm`, `html`, and `xml` files verbatim as UTF-8. Binary
/// formats in [`SUPPORTED_EXTENSIONS`] require an external extractor and are
/// rejected with [`ReaderError::UnsupportedExtension`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentReader;

impl FsDocumentReader {
    /// Create a new filesystem reader.
    pub fn new() -> Self {
        FsDocumentReader
    }
}

impl DocumentReader for FsDocumentReader {
    fn read(&self, path: &Path) -> Result<String, ReaderError> {
        let ext = extension_of(path).unwrap_or_default();
        if !PLAIN_TEXT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ReaderError::UnsupportedExtension {
                path: path.to_path_buf(),
            });
        }
        match fs::read_to_string(path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ReaderError::NotFound {
                path: path.to_path_buf(),
            }),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(ReaderError::Extraction {
                path: path.to_path_buf(),
                reason: "not valid UTF-8".to_string(),
            }),
            Err(e) => Err(ReaderError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extension_matching() {
        assert!(is_supported(Path::new("report.txt")));
        assert!(is_supported(Path::new("slides.PPTX")));
        assert!(is_supported(Path::new("page.Html")));
        assert!(!is_supported(Path::new("archive.zip")));
        assert!(!is_supported(Path::new("no_extension")));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = FsDocumentReader::new().read(Path::new("/nonexistent/file.txt"));
        assert!(matches!(result, Err(ReaderError::NotFound { .. })));
    }

    #[test]
    fn test_binary_format_is_unsupported() {
        let result = FsDocumentReader::new().read(Path::new("report.pdf"));
        assert!(matches!(
            result,
            Err(ReaderError::UnsupportedExtension { .. })
        ));
    }
}
