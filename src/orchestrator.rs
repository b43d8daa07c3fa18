//! Resolution orchestrator: turns an image or raw text plus a language into
//! exactly one normalized medicine record.
//!
//! Resolution policy, in order of preference:
//!
//! 1. When text is already available (raw text input, or OCR output), the
//!    local matcher runs *before* any network call — known medicines resolve
//!    with zero latency and zero cost.
//! 2. Text the table doesn't know goes to the structured-extraction
//!    endpoint. A degraded (non-JSON) answer still counts as a resolution.
//! 3. A raw image with no OCR collaborator configured is delegated whole to
//!    the scan backend, which runs its own OCR and lookup.
//!
//! Every terminal resolution appends exactly one history entry. Transport
//! failures terminate the operation without touching history; the caller
//! renders the error's localized message.

use crate::config::Config;
use crate::error::{InputError, ScanError};
use crate::history::ScanHistory;
use crate::i18n::Language;
use crate::lookup::MedicineTable;
use crate::matcher;
use crate::ocr::TextExtractor;
use crate::record::{MedicineRecord, Resolution};
use crate::{extraction, scan_api};
use tracing::info;

/// The resolution pipeline, wired to its collaborators.
///
/// Holds a shared HTTP client and borrows the injected config and table, so
/// tests can point it at mock servers and fixture data.
pub struct Resolver<'a> {
    client: reqwest::Client,
    config: &'a Config,
    table: &'a MedicineTable,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a Config, table: &'a MedicineTable) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            table,
        }
    }

    /// Resolve free text (already extracted or user-supplied).
    ///
    /// Local match first; the extraction endpoint is only consulted for text
    /// the table doesn't know. Empty text is an input error: nothing is
    /// resolved and no history entry is made.
    pub async fn resolve_text(
        &self,
        text: &str,
        language: Language,
        history: &mut ScanHistory,
    ) -> Result<MedicineRecord, ScanError> {
        if text.trim().is_empty() {
            return Err(InputError::EmptyText.into());
        }

        match matcher::match_text(self.table, text, language) {
            Resolution::Found(record) => {
                info!("resolved locally: {}", record.name);
                Ok(self.finish(record, language, history))
            }
            Resolution::NotFound { expiry_date } => {
                info!("no local match, delegating to extraction endpoint");
                let mut record =
                    extraction::extract_structured(&self.client, self.config, text, language)
                        .await?;
                // The local date scan already ran; keep its answer when the
                // endpoint produced none
                if record.expiry_date.is_empty() {
                    if let Some(date) = expiry_date {
                        record.expiry_date = date;
                    }
                }
                Ok(self.finish(record, language, history))
            }
        }
    }

    /// Resolve a raw image by delegating it whole to the scan backend.
    pub async fn resolve_image(
        &self,
        image: &[u8],
        language: Language,
        history: &mut ScanHistory,
    ) -> Result<MedicineRecord, ScanError> {
        if image.is_empty() {
            return Err(InputError::EmptyImage.into());
        }

        info!("delegating image to scan backend");
        let record = scan_api::scan_image(&self.client, self.config, image, language).await?;
        Ok(self.finish(record, language, history))
    }

    /// Resolve a raw image through a local OCR collaborator.
    ///
    /// OCR text goes down the text path, so the local matcher always runs
    /// before any network call. When OCR reads nothing legible the image is
    /// handed to the scan backend instead, whose server-side OCR may do
    /// better.
    pub async fn resolve_image_with_ocr<E: TextExtractor>(
        &self,
        image: &[u8],
        language: Language,
        extractor: &E,
        history: &mut ScanHistory,
    ) -> Result<MedicineRecord, ScanError> {
        if image.is_empty() {
            return Err(InputError::EmptyImage.into());
        }

        let text = extractor
            .extract_text(image)
            .await
            .map_err(ScanError::Ocr)?;

        if text.trim().is_empty() {
            info!("OCR produced no text, falling back to scan backend");
            return self.resolve_image(image, language, history).await;
        }

        self.resolve_text(&text, language, history).await
    }

    /// Terminal step: normalize, record history, hand the record out.
    fn finish(
        &self,
        record: MedicineRecord,
        language: Language,
        history: &mut ScanHistory,
    ) -> MedicineRecord {
        let record = record.normalized(language);
        history.push(record.clone());
        record
    }
}
