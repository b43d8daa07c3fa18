//! Structured extraction: delegate free text the local matcher couldn't
//! resolve to a completion-style endpoint.
//!
//! The endpoint is asked (in the active language) for a JSON object
//! `{name, usage, expiryDate, warnings}`. A response whose content fails to
//! parse as JSON is *not* an error: the raw content becomes the record name
//! and the remaining fields get localized "information not available"
//! sentinels. Only transport-level failures surface as [`ServiceError`].

use crate::config::Config;
use crate::error::ServiceError;
use crate::i18n::Language;
use crate::record::MedicineRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// The JSON shape the system prompt asks the model for.
#[derive(Debug, Deserialize)]
struct ExtractedFields {
    #[serde(default)]
    name: String,
    #[serde(default)]
    usage: String,
    #[serde(default, rename = "expiryDate")]
    expiry_date: String,
    #[serde(default)]
    warnings: String,
}

fn system_prompt(language: Language) -> &'static str {
    if language == Language::HINDI {
        "आप एक चिकित्सा सूचना सहायक हैं। दिए गए पाठ से दवा का नाम, उपयोग और समाप्ति तिथि निकालें। \
         कोई भी महत्वपूर्ण चेतावनी भी प्रदान करें। अपनी प्रतिक्रिया को निम्नलिखित संरचना के साथ JSON के \
         रूप में प्रारूपित करें: { name: string, usage: string, expiryDate: string, warnings: string }"
    } else {
        "You are a medical information assistant. Extract medicine name, usage, and expiry date \
         from the given text. Also provide any important warnings. Format your response as JSON \
         with the following structure: { name: string, usage: string, expiryDate: string, warnings: string }"
    }
}

/// Build a record from the endpoint's textual content.
///
/// JSON content yields a structured record; anything else yields the
/// documented degraded record. Factored out of the network path so the
/// fallback behavior is testable without a server.
fn record_from_content(content: &str, language: Language) -> MedicineRecord {
    let strings = language.strings();
    match serde_json::from_str::<ExtractedFields>(content) {
        Ok(fields) => MedicineRecord {
            name: fields.name,
            usage: fields.usage,
            warnings: fields.warnings,
            dosage: String::new(),
            side_effects: String::new(),
            expiry_date: fields.expiry_date,
            common_names: Vec::new(),
            timestamp: Utc::now(),
            language,
        },
        Err(_) => {
            warn!("extraction content is not JSON, degrading to sentinel record");
            MedicineRecord {
                name: content.trim().to_string(),
                usage: strings.info_not_available.to_string(),
                warnings: strings.no_warnings_found.to_string(),
                dosage: String::new(),
                side_effects: String::new(),
                expiry_date: strings.not_found.to_string(),
                common_names: Vec::new(),
                timestamp: Utc::now(),
                language,
            }
        }
    }
    .normalized(language)
}

/// Send `text` to the structured-extraction endpoint and return a record.
///
/// Degraded (non-JSON) content is absorbed as described in the module docs;
/// the returned `ServiceError` covers transport failures, error statuses,
/// and a malformed response envelope only.
pub async fn extract_structured(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
    language: Language,
) -> Result<MedicineRecord, ServiceError> {
    let request = ChatRequest {
        model: config.extraction_model.clone(),
        messages: vec![
            Message {
                role: "system".to_string(),
                content: system_prompt(language).to_string(),
            },
            Message {
                role: "user".to_string(),
                content: text.to_string(),
            },
        ],
        max_tokens: 500,
        temperature: 0.2,
    };

    let response = client
        .post(&config.extraction_api_url)
        .bearer_auth(&config.extraction_api_key)
        .json(&request)
        .send()
        .await
        .map_err(|err| {
            warn!("extraction endpoint unreachable: {}", err);
            ServiceError::Unreachable
        })?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::ServerRejected {
            status: Some(status),
            message: (!body.is_empty()).then_some(body),
        });
    }

    let chat_response: ChatResponse = response
        .json()
        .await
        .map_err(|_| ServiceError::InvalidPayload)?;

    let content = chat_response
        .choices
        .first()
        .map(|c| c.message.content.as_str())
        .ok_or(ServiceError::InvalidPayload)?;

    info!("extraction endpoint returned {} bytes of content", content.len());
    Ok(record_from_content(content, language))
}
