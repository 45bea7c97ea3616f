//! # ver-extract
//!
//! Turns uploaded policy documents into plain text for analysis.
//!
//! - Plain text: lossy UTF-8, a leading byte order mark is dropped
//! - PDF (`lopdf`): page by page, items space-joined, one line per page
//! - DOCX (`zip` + `quick-xml`): raw paragraph text, formatting discarded
//! - Anything else: read as text on a best-effort basis
//!
//! Extraction never panics. Every failure is an [`ExtractError`] that the
//! caller reports as a status message.

mod docx;
mod error;
mod kind;
mod pdf;

use std::path::Path;

pub use error::ExtractError;
pub use kind::{DocumentKind, MEDIA_TYPE_DOCX, MEDIA_TYPE_PDF, MEDIA_TYPE_TEXT};

const BOM: char = '\u{feff}';

/// Extract plain text from document bytes of the given kind.
///
/// # Errors
///
/// Returns `ExtractError` when a PDF or DOCX cannot be parsed.
pub fn extract(bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => pdf::extract(bytes),
        DocumentKind::Docx => docx::extract(bytes),
        DocumentKind::Text | DocumentKind::Other => Ok(decode_text(bytes)),
    }
}

/// Read a file and extract its text. `declared_media_type` wins over the
/// file extension when choosing the extractor.
///
/// # Errors
///
/// Returns `ExtractError::Io` when the file cannot be read, otherwise the
/// same errors as [`extract`].
pub async fn extract_file(
    path: &Path,
    declared_media_type: Option<&str>,
) -> Result<(DocumentKind, String), ExtractError> {
    let kind = DocumentKind::detect(path, declared_media_type);
    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(path = %path.display(), %kind, bytes = bytes.len(), "extracting document");
    let text = extract(&bytes, kind)?;
    Ok((kind, text))
}

fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix(BOM).unwrap_or(&text).to_string()
}
