use std::fs;
use std::path::Path;

use lopdf::Document;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("PDF parsing failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Extract a document's text as one string, dispatching on the extension.
///
/// PDF pages are extracted in document order and joined with newlines; no
/// semantic structure (headings, columns) is preserved. Plain-text and
/// Markdown files are read verbatim. Fails if the path does not reference a
/// valid readable document.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "pdf" => extract_pdf(path),
        "txt" | "text" | "md" | "markdown" => Ok(fs::read_to_string(path)?),
        other => Err(ExtractionError::UnsupportedType(other.to_string())),
    }
}

fn extract_pdf(path: &Path) -> Result<String, ExtractionError> {
    let document = Document::load(path)?;

    // get_pages is keyed by page number, so iteration is document order.
    let mut pages = Vec::new();
    for page_number in document.get_pages().keys() {
        pages.push(document.extract_text(&[*page_number])?);
    }

    debug!(
        path = %path.display(),
        page_count = pages.len(),
        "Extracted text from PDF"
    );

    Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_plain_text_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "First sentence. Second sentence.").unwrap();

        let text = extract_text(&path).unwrap();
        assert_eq!(text, "First sentence. Second sentence.");
    }

    #[test]
    fn test_reads_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# Heading\n\nBody text.").unwrap();

        let text = extract_text(&path).unwrap();
        assert!(text.contains("Body text."));
    }

    #[test]
    fn test_unsupported_extension_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.zip");
        fs::write(&path, b"PK\x03\x04").unwrap();

        let error = extract_text(&path).unwrap_err();
        assert!(matches!(error, ExtractionError::UnsupportedType(ext) if ext == "zip"));
    }

    #[test]
    fn test_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.txt");

        assert!(matches!(
            extract_text(&path),
            Err(ExtractionError::Io(_))
        ));
    }

    #[test]
    fn test_corrupt_pdf_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"not actually a pdf").unwrap();

        assert!(matches!(extract_text(&path), Err(ExtractionError::Pdf(_))));
    }
}
