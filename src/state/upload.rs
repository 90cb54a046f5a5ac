//! File handles for the upload zone

use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// MIME type accepted by the upload zone
pub const PDF_MIME: &str = "application/pdf";

/// Upload size cap: 10MB
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Metadata of a chosen file. The content stays on disk and is opaque here;
/// only name, type and size matter to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Build a handle from a path on disk, guessing the MIME type from the
    /// extension the way a file picker reports it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        if metadata.is_dir() {
            return Err(anyhow!("{} is a directory", path.display()));
        }
        let name = path
            .file_name()
            .ok_or_else(|| anyhow!("{} has no file name", path.display()))?
            .to_string_lossy()
            .into_owned();
        Ok(Self::new(name, guess_mime(path), metadata.len()))
    }
}

/// Extension-based MIME guess, matching what browser pickers report for the
/// handful of types users actually drop on the form.
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => PDF_MIME,
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        "csv" => "text/csv",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_guess_mime_pdf() {
        assert_eq!(guess_mime(Path::new("invoice.pdf")), PDF_MIME);
        assert_eq!(guess_mime(Path::new("INVOICE.PDF")), PDF_MIME);
    }

    #[test]
    fn test_guess_mime_other() {
        assert_eq!(guess_mime(Path::new("scan.png")), "image/png");
        assert_eq!(guess_mime(Path::new("notes.txt")), "text/plain");
        assert_eq!(guess_mime(Path::new("mystery.bin")), "application/octet-stream");
        assert_eq!(guess_mime(Path::new("no_extension")), "application/octet-stream");
    }

    #[test]
    fn test_max_upload_bytes_is_ten_mib() {
        assert_eq!(MAX_UPLOAD_BYTES, 10_485_760);
    }

    #[test]
    fn test_from_path_missing_file_errors() {
        let path = PathBuf::from("/definitely/not/here.pdf");
        assert!(FileHandle::from_path(&path).is_err());
    }
}
