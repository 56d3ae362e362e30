//! Text extraction from uploaded résumé documents.

use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),
}

/// Turns raw document bytes into plain text. Implementations are synchronous
/// and CPU-bound; async callers should run them on a blocking thread.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &[u8]) -> Result<String, ExtractionError>;
}

/// `pdf-extract` backed extractor.
///
/// Pages are concatenated in order, each followed by a newline. The parser's
/// leading and trailing line breaks on a page are dropped, and pages with no
/// extractable text (empty or whitespace only) contribute nothing.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, document: &[u8]) -> Result<String, ExtractionError> {
        // pdf-extract panics on some malformed inputs instead of returning Err.
        let pages = catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(document)
        }))
        .map_err(|_| {
            warn!("PDF parser panicked on a {} byte document", document.len());
            ExtractionError::UnreadableDocument("the PDF parser could not process this file".to_string())
        })?
        .map_err(|e| {
            warn!("PDF extraction failed: {e}");
            ExtractionError::UnreadableDocument(e.to_string())
        })?;

        debug!("Extracted {} pages", pages.len());
        Ok(join_pages(pages))
    }
}

fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut text = String::new();
    for page in pages {
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(page.trim_matches(|c: char| c == '\n' || c == '\r'));
        text.push('\n');
    }
    text
}
