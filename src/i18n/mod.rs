//! Internationalization (i18n) module for bilingual support.
//!
//! This module centralizes all language-related logic: the registry of
//! supported languages, the validated `Language` type, and every localized
//! user-facing string (field labels, sentinels, error messages, reminder
//! text).
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type used throughout the resolution pipeline
//! - `strings`: Centralized localized strings for both languages
//!
//! # Example
//!
//! ```rust,ignore
//! use medicine_scanner::i18n::Language;
//!
//! let hindi = Language::from_code("hi");
//! let sentinel = hindi.strings().not_found;
//!
//! // Unrecognized codes fail closed to English
//! let fallback = Language::from_code("xx");
//! assert_eq!(fallback.code(), "en");
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
