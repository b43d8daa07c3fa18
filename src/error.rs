//! Error taxonomy for the resolution pipeline.
//!
//! Three failure families, mirrored from the product behavior:
//!
//! - [`InputError`]: the caller handed us something unusable (empty image,
//!   empty text, non-positive minute count). Surfaced immediately, never
//!   touches record or history state.
//! - [`PermissionError`]: a device permission (camera, notifications) was
//!   not granted.
//! - [`ServiceError`]: a remote call failed at the transport or envelope
//!   level. A response whose *content* merely couldn't be structured is not
//!   an error — that becomes a degraded record with sentinel fields.
//!
//! Every variant renders a localized user-facing message through
//! `user_message`, selected by the active language.

use crate::i18n::Language;
use thiserror::Error;

/// Invalid caller-supplied input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("empty image data")]
    EmptyImage,

    #[error("empty text")]
    EmptyText,

    #[error("invalid minute count: {0}")]
    InvalidMinutes(i64),
}

impl InputError {
    /// Localized message for a blocking user notice.
    pub fn user_message(&self, language: Language) -> String {
        let strings = language.strings();
        match self {
            InputError::EmptyImage | InputError::EmptyText => strings.empty_input.to_string(),
            InputError::InvalidMinutes(_) => strings.invalid_minutes.to_string(),
        }
    }
}

/// A device permission was denied or never granted.
#[derive(Debug, Error)]
pub enum PermissionError {
    #[error("camera permission denied")]
    CameraDenied,

    #[error("notification permission not granted")]
    NotificationsDenied,
}

impl PermissionError {
    /// Localized message for a blocking user notice.
    pub fn user_message(&self, language: Language) -> String {
        let strings = language.strings();
        match self {
            PermissionError::CameraDenied => strings.camera_permission_needed.to_string(),
            PermissionError::NotificationsDenied => {
                strings.notification_permission_needed.to_string()
            }
        }
    }
}

/// A remote resolution call failed.
///
/// Auth failures from the extraction endpoint arrive as `ServerRejected`
/// carrying the 401/403 status; there is no separate variant for them.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No response at all: connect failure or the 30-second bound expired.
    #[error("service unreachable")]
    Unreachable,

    /// The service answered with an error status or a `success: false`
    /// envelope. Carries whatever detail the server supplied.
    #[error("server rejected request (status {status:?}): {message:?}")]
    ServerRejected {
        status: Option<u16>,
        message: Option<String>,
    },

    /// A 2xx response whose payload doesn't fit the expected envelope.
    #[error("invalid response payload")]
    InvalidPayload,
}

impl ServiceError {
    /// Localized user-facing message: the generic processing-error prefix
    /// followed by the most specific detail available.
    pub fn user_message(&self, language: Language) -> String {
        let strings = language.strings();
        let detail = match self {
            ServiceError::Unreachable => strings.no_server_response.to_string(),
            ServiceError::ServerRejected { status, message } => match (message, status) {
                (Some(msg), _) => msg.clone(),
                (None, Some(code)) => format!("{}{}", strings.server_error_prefix, code),
                (None, None) => strings.invalid_server_payload.to_string(),
            },
            ServiceError::InvalidPayload => strings.invalid_server_payload.to_string(),
        };
        format!("{}{}", strings.error_processing, detail)
    }
}

/// Any failure the orchestrator can terminate with.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Permission(#[from] PermissionError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The OCR collaborator failed to produce text.
    #[error("text extraction failed: {0}")]
    Ocr(anyhow::Error),
}

impl ScanError {
    /// Localized user-facing message for the active language.
    pub fn user_message(&self, language: Language) -> String {
        match self {
            ScanError::Input(err) => err.user_message(language),
            ScanError::Permission(err) => err.user_message(language),
            ScanError::Service(err) => err.user_message(language),
            ScanError::Ocr(err) => {
                format!("{}{}", language.strings().error_processing, err)
            }
        }
    }
}
