//! PDF text extraction via `lopdf`.
//!
//! Every string shown by a `Tj`, `TJ`, `'` or `"` operator is one text item.
//! Items are decoded with the font selected by the nearest preceding `Tf`.

use std::collections::BTreeMap;

use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};

use crate::error::ExtractError;

/// Extract text page by page in page order.
pub(crate) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let document = Document::load_mem(bytes)?;
    let mut pages = Vec::new();
    for page_id in document.get_pages().into_values() {
        pages.push(page_items(&document, page_id)?);
    }
    tracing::debug!(pages = pages.len(), "extracted PDF text");
    Ok(join_pages(&pages))
}

/// The text items of one page in content-stream order.
fn page_items(document: &Document, page_id: ObjectId) -> Result<Vec<String>, ExtractError> {
    let encodings = document
        .get_page_fonts(page_id)?
        .into_iter()
        .filter_map(|(name, font)| font.get_font_encoding(document).ok().map(|enc| (name, enc)))
        .collect::<BTreeMap<_, _>>();
    let content = Content::decode(&document.get_page_content(page_id)?)?;

    let mut items = Vec::new();
    let mut font: Option<&[u8]> = None;
    for operation in &content.operations {
        let shown: &[Object] = match operation.operator.as_str() {
            "Tf" => {
                font = operation.operands.first().and_then(|name| name.as_name().ok());
                continue;
            }
            "Tj" | "'" => operation.operands.get(..1).unwrap_or_default(),
            "\"" => operation.operands.get(2..3).unwrap_or_default(),
            "TJ" => match operation.operands.first() {
                Some(Object::Array(parts)) => parts,
                _ => continue,
            },
            _ => continue,
        };

        let mut item = String::new();
        for part in shown {
            let Object::String(bytes, _) = part else {
                continue;
            };
            match font.and_then(|name| encodings.get(name)) {
                Some(encoding) => item.push_str(&Document::decode_text(encoding, bytes)?),
                None => item.push_str(&String::from_utf8_lossy(bytes)),
            }
        }
        if !item.is_empty() {
            items.push(item);
        }
    }
    Ok(items)
}

/// Join each page's items with a single space and terminate every page with
/// a newline.
pub(crate) fn join_pages<S: AsRef<str>>(pages: &[Vec<S>]) -> String {
    let mut text = String::new();
    for items in pages {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(item.as_ref());
        }
        text.push('\n');
    }
    text
}
