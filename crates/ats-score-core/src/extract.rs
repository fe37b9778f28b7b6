//! Turning an uploaded document into plain resume text.
//!
//! Plain text and markdown are decoded directly. PDF text comes from
//! `pdf-extract`; DOCX text is read from the `<w:t>` runs of
//! `word/document.xml` inside the zip container.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::error::{ExtractionError, ExtractionResult};
use crate::markdown;

/// Part of a DOCX package holding the main document body.
const DOCX_BODY: &str = "word/document.xml";

/// Minimum trimmed characters a document must yield to be worth scoring.
pub const DEFAULT_MIN_CHARS: usize = 50;

/// Document kinds known to the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.txt`, `.text`, or no extension at all.
    PlainText,
    /// `.md` or `.markdown`.
    Markdown,
    /// `.pdf` with a text layer.
    Pdf,
    /// `.docx` (Office Open XML).
    Docx,
}

impl DocumentFormat {
    /// Pick a format from a file extension, ignoring case.
    ///
    /// A missing extension is treated as plain text. Anything unrecognized
    /// is an [`ExtractionError::UnsupportedFormat`].
    pub fn from_extension(extension: Option<&str>) -> ExtractionResult<Self> {
        let Some(ext) = extension else {
            return Ok(Self::PlainText);
        };
        match ext.to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(Self::PlainText),
            "md" | "markdown" => Ok(Self::Markdown),
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            _ => Err(ExtractionError::UnsupportedFormat {
                extension: ext.to_string(),
            }),
        }
    }
}

/// Extract scorable text from document bytes.
///
/// Fails with [`ExtractionError::CorruptFile`] when the bytes cannot be
/// parsed as the given format, and with [`ExtractionError::EmptyOrImageOnly`]
/// when fewer than `min_chars` characters remain after trimming. A scanned
/// PDF parses fine but hits the second case.
#[tracing::instrument(skip(bytes), fields(bytes = bytes.len()))]
pub fn extract_text(
    format: DocumentFormat,
    bytes: &[u8],
    min_chars: usize,
) -> ExtractionResult<String> {
    let text = match format {
        DocumentFormat::Pdf => pdf_text(bytes)?,
        DocumentFormat::Docx => docx_text(bytes)?,
        DocumentFormat::PlainText => decode(bytes)?.to_string(),
        DocumentFormat::Markdown => markdown::to_plain_text(decode(bytes)?),
    };

    let chars = text.trim().chars().count();
    if chars < min_chars {
        tracing::warn!(chars, min_chars, "document yielded too little text");
        return Err(ExtractionError::EmptyOrImageOnly {
            chars,
            min: min_chars,
        });
    }

    Ok(text)
}

fn decode(bytes: &[u8]) -> ExtractionResult<&str> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ExtractionError::CorruptFile(format!("not valid UTF-8: {e}")))?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

fn pdf_text(bytes: &[u8]) -> ExtractionResult<String> {
    // pdf-extract panics on some malformed inputs instead of returning Err
    let parsed = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractionError::CorruptFile("PDF parser aborted".to_string()))?;
    parsed.map_err(|e| ExtractionError::CorruptFile(format!("unreadable PDF: {e}")))
}

fn docx_text(bytes: &[u8]) -> ExtractionResult<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(corrupt_docx)?;
    let mut xml = Vec::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(|e| corrupt_docx(format!("{DOCX_BODY}: {e}")))?
        .read_to_end(&mut xml)
        .map_err(corrupt_docx)?;

    document_runs(&xml).map_err(corrupt_docx)
}

fn corrupt_docx(err: impl std::fmt::Display) -> ExtractionError {
    ExtractionError::CorruptFile(format!("unreadable DOCX: {err}"))
}

/// Concatenate `<w:t>` runs, one line per paragraph.
fn document_runs(xml: &[u8]) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(tag) if tag.local_name().as_ref() == b"t" => in_run_text = true,
            Event::End(tag) => match tag.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(tag) => match tag.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(run) if in_run_text => text.push_str(&run.unescape()?),
            Event::CData(run) if in_run_text => text.push_str(&String::from_utf8_lossy(&run)),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}
