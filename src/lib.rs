//! Medicine scanner resolution pipeline.
//!
//! Takes an image of a medicine package (or already extracted text) and
//! resolves it into a normalized bilingual record — name, usage, warnings,
//! dosage, side effects, expiry — ready for display, speech narration, scan
//! history, and reminder scheduling, in English or Hindi.
//!
//! The pipeline prefers the local lookup table (no network) and falls back
//! to two remote collaborators: a structured-extraction endpoint for free
//! text and a server-side scan endpoint for whole images. See
//! [`orchestrator::Resolver`] for the entry points.

pub mod config;
pub mod error;
pub mod extraction;
pub mod history;
pub mod i18n;
pub mod lookup;
pub mod matcher;
pub mod ocr;
pub mod orchestrator;
pub mod preference;
pub mod record;
pub mod reminder;
pub mod scan_api;
pub mod speech;

pub use config::Config;
pub use error::{InputError, PermissionError, ScanError, ServiceError};
pub use history::{ScanHistory, ScanHistoryItem};
pub use i18n::Language;
pub use lookup::{LookupEntry, MedicineTable};
pub use orchestrator::Resolver;
pub use record::{MedicineRecord, Resolution};
