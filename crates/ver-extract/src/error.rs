//! Extraction error types for ver-extract.

/// Errors that can occur while turning an uploaded document into text.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("PDF parse failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("DOCX container is unreadable: {0}")]
    Container(#[from] zip::result::ZipError),

    #[error("DOCX body is malformed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("DOCX is missing part {0}")]
    MissingPart(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
