//! Image-scan backend client: send raw image data to the server-side scan
//! endpoint and receive a record envelope.
//!
//! Wire contract: request `{imageData, language}` where `imageData` is a
//! base64 data URL; response `{success, data?, message?}` within a bounded
//! 30-second wait. The server runs its own OCR and lookup, so this path is
//! the whole-image alternative to local extraction.

use crate::config::Config;
use crate::error::ServiceError;
use crate::i18n::Language;
use crate::record::MedicineRecord;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanRequest<'a> {
    image_data: String,
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScanResponse {
    success: bool,
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Encode an image as the data URL the backend splits apart.
fn encode_image(image: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(image))
}

/// Send `image` to the scan backend and return the resolved record.
///
/// Error mapping, per the product behavior:
/// - timeout or connect failure (no response at all) → `Unreachable`
/// - HTTP error status → `ServerRejected` with status code and body message
/// - `success: false` envelope → `ServerRejected` with the server message
/// - missing or malformed `data` → `InvalidPayload`
pub async fn scan_image(
    client: &reqwest::Client,
    config: &Config,
    image: &[u8],
    language: Language,
) -> Result<MedicineRecord, ServiceError> {
    let request = ScanRequest {
        image_data: encode_image(image),
        language: language.code(),
    };

    let response = client
        .post(&config.scan_api_url)
        .timeout(Duration::from_secs(config.scan_timeout_secs))
        .json(&request)
        .send()
        .await
        .map_err(|err| {
            warn!("scan backend unreachable: {}", err);
            ServiceError::Unreachable
        })?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        // The backend puts its detail in the same envelope on errors
        let message = response
            .json::<ScanResponse>()
            .await
            .ok()
            .and_then(|envelope| envelope.message);
        return Err(ServiceError::ServerRejected {
            status: Some(status),
            message,
        });
    }

    let envelope: ScanResponse = response
        .json()
        .await
        .map_err(|_| ServiceError::InvalidPayload)?;

    if !envelope.success {
        return Err(ServiceError::ServerRejected {
            status: None,
            message: envelope.message,
        });
    }

    let data = envelope.data.ok_or(ServiceError::InvalidPayload)?;
    let record: MedicineRecord =
        serde_json::from_value(data).map_err(|_| ServiceError::InvalidPayload)?;

    info!("scan backend resolved record: {}", record.name);
    Ok(record.normalized(language))
}
