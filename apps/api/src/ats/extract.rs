//! Resume text extraction.
//!
//! PDFs go through `pdf-extract` via a uniquely named temporary file that is removed
//! when it drops, on every exit path. Everything else is decoded as UTF-8.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tempfile::NamedTempFile;
use thiserror::Error;

/// An uploaded resume: the declared filename plus the raw file contents.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Bytes,
}

impl ResumeUpload {
    pub fn is_pdf(&self) -> bool {
        Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("{0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("{0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to stage upload for extraction: {0}")]
    TempFile(#[from] std::io::Error),

    #[error("PDF extraction aborted: {0}")]
    Aborted(String),
}

/// Turns an uploaded resume into plain text.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, upload: ResumeUpload) -> Result<String, ExtractionError>;
}

/// Default extractor: `pdf-extract` for PDFs, strict UTF-8 for everything else.
pub struct DocumentTextExtractor {
    temp_dir: PathBuf,
}

impl DocumentTextExtractor {
    pub fn new(temp_dir: PathBuf) -> Self {
        Self { temp_dir }
    }
}

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, upload: ResumeUpload) -> Result<String, ExtractionError> {
        if !upload.is_pdf() {
            return decode_text(upload.bytes);
        }

        let temp_dir = self.temp_dir.clone();
        // pdf-extract is synchronous and can panic on malformed input.
        tokio::task::spawn_blocking(move || extract_pdf_text(&temp_dir, &upload.bytes))
            .await
            .map_err(|e| ExtractionError::Aborted(e.to_string()))?
    }
}

/// Writes `bytes` to a fresh temp file in `temp_dir` and runs `pdf-extract` on it.
/// The file is deleted when `staged` drops, whether or not extraction succeeded.
pub fn extract_pdf_text(temp_dir: &Path, bytes: &[u8]) -> Result<String, ExtractionError> {
    let staged = stage_upload(temp_dir, bytes)?;
    let text = pdf_extract::extract_text(staged.path())?;
    Ok(text)
}

fn stage_upload(temp_dir: &Path, bytes: &[u8]) -> Result<NamedTempFile, ExtractionError> {
    let mut staged = tempfile::Builder::new()
        .prefix("ats-resume-")
        .suffix(".pdf")
        .tempfile_in(temp_dir)?;
    staged.write_all(bytes)?;
    staged.flush()?;
    Ok(staged)
}

fn decode_text(bytes: Bytes) -> Result<String, ExtractionError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
