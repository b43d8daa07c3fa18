//! OCR collaborator seam.
//!
//! Text extraction is a black box to the resolution pipeline: whatever sits
//! behind this trait (a Tesseract binding, a hosted OCR API, a canned string
//! in tests) just returns its best-effort transcription with no correctness
//! guarantee. The orchestrator only cares that text comes back.

use anyhow::Result;

/// Best-effort text extraction from raw image bytes.
pub trait TextExtractor {
    /// Extract whatever text the engine can read from `image`.
    ///
    /// An empty string is a valid answer (nothing legible); errors are for
    /// the engine itself failing.
    fn extract_text(&self, image: &[u8]) -> impl std::future::Future<Output = Result<String>> + Send;
}
