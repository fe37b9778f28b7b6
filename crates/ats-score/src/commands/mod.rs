//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use ats_score_core::extract::{DocumentFormat, extract_text};

pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod score;
pub mod skills;

/// Read a file's bytes after validating its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Vec<u8>> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Read a document and extract its plain text, picking the format from the extension.
///
/// `min_chars` of zero accepts any non-failing extraction, including empty text.
pub fn read_document(
    path: &Utf8Path,
    max_bytes: Option<usize>,
    min_chars: usize,
) -> anyhow::Result<String> {
    let format = DocumentFormat::from_extension(path.extension())
        .with_context(|| format!("cannot read {path}"))?;
    let bytes = read_input_file(path, max_bytes)?;
    extract_text(format, &bytes, min_chars).with_context(|| format!("cannot read {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn oversized_file_is_rejected_before_reading() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "resume.txt", &"x".repeat(100));
        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert!(read_input_file(&path, None).is_ok());
    }

    #[test]
    fn unsupported_extension_names_the_file() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "resume.png", "not really an image");
        let err = read_document(&path, None, 0).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("resume.png"));
        assert!(message.contains("unsupported file type"));
    }

    #[test]
    fn markdown_document_is_flattened() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "resume.md", "# Jane\n\n## Skills\n\n- Rust\n- Docker\n");
        let text = read_document(&path, None, 0).unwrap();
        assert_eq!(text, "Jane\nSkills\nRust\nDocker");
    }

    #[test]
    fn short_document_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "resume.txt", "tiny");
        let err = read_document(&path, None, 50).unwrap_err();
        assert!(format!("{err:#}").contains("could not extract enough text"));
    }
}
