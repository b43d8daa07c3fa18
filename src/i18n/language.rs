//! Language type: validated language representation.
//!
//! The `Language` type wraps a registry-validated language code. There is no
//! error state: codes the registry doesn't know fail closed to English. That
//! is the defined default for the scanner, not a bug — a package scanned with
//! a garbled preference value must still resolve.

use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, HINDI_STRINGS};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A validated language.
///
/// Only languages present in the registry can be constructed, so every
/// `Language` value is safe to look up localized strings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "hi")
    code: &'static str,
}

impl Language {
    /// English, the canonical language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Hindi.
    pub const HINDI: Language = Language { code: "hi" };

    /// Create a Language from a language code string.
    ///
    /// Unrecognized codes fail closed to English semantics. This mirrors how
    /// the preference layer behaves: a stale or corrupt stored code must
    /// never block resolution.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(Language::from_code("hi"), Language::HINDI);
    /// assert_eq!(Language::from_code("klingon"), Language::ENGLISH);
    /// ```
    pub fn from_code(code: &str) -> Language {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Language { code: config.code },
            None => Language::canonical(),
        }
    }

    /// Get the canonical (fallback) language, English.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language (e.g., "Hindi").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the BCP-47 voice tag for speech synthesis (e.g., "hi-IN").
    pub fn voice(&self) -> &'static str {
        self.config().voice
    }

    /// Get the localized string set for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self.code {
            "hi" => &HINDI_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

// Serialized as the bare code ("en"/"hi") so records round-trip through the
// scan backend envelope unchanged. Deserialization fails closed like
// `from_code`.
impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Language::from_code(&code))
    }
}
