//! Document kind detection from media types and file extensions.

use std::fmt;
use std::path::Path;

pub const MEDIA_TYPE_PDF: &str = "application/pdf";
pub const MEDIA_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MEDIA_TYPE_TEXT: &str = "text/plain";

/// How an uploaded document is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
    Docx,
    /// Unrecognised input, read as text on a best-effort basis.
    Other,
}

impl DocumentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Other => "other",
        }
    }

    /// Classify a declared media type. Parameters such as `; charset=utf-8`
    /// are ignored.
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Self {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            MEDIA_TYPE_PDF => Self::Pdf,
            MEDIA_TYPE_DOCX => Self::Docx,
            t if t.starts_with("text/") => Self::Text,
            _ => Self::Other,
        }
    }

    /// Classify a file by its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("docx") => Self::Docx,
            Some("txt" | "text" | "md") => Self::Text,
            _ => Self::Other,
        }
    }

    /// A declared media type wins over the file extension.
    #[must_use]
    pub fn detect(path: &Path, declared_media_type: Option<&str>) -> Self {
        declared_media_type.map_or_else(|| Self::from_path(path), Self::from_media_type)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
