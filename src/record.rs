//! The normalized medicine record: canonical output of every resolution.

use crate::i18n::Language;
use crate::lookup::LookupEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved medicine record, ready for display, narration, and history.
///
/// Wire names are camelCase to match the scan backend envelope. Every
/// textual field is guaranteed non-empty once [`MedicineRecord::normalized`]
/// has run; missing data is replaced with the localized sentinel instead of
/// an absent value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub warnings: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub side_effects: String,
    /// Extracted from the package text; format-matched, not validated
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub common_names: Vec<String>,
    /// When the record was produced
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    /// Language the textual fields are rendered in
    #[serde(default)]
    pub language: Language,
}

impl MedicineRecord {
    /// Build a record from a lookup-table entry, selecting the localized
    /// field variants for `language`.
    pub fn from_entry(entry: &LookupEntry, language: Language, expiry_date: Option<String>) -> Self {
        Self {
            name: entry.name_in(language).to_string(),
            usage: entry.usage_in(language).to_string(),
            warnings: entry.warnings_in(language).to_string(),
            dosage: entry.dosage_in(language).to_string(),
            side_effects: entry.side_effects_in(language).to_string(),
            expiry_date: expiry_date.unwrap_or_default(),
            common_names: entry.aliases.iter().map(|a| a.to_string()).collect(),
            timestamp: Utc::now(),
            language,
        }
    }

    /// Build a fully-sentinel record for text with no recognized medicine.
    ///
    /// A date extracted from the text is still carried, per the matcher
    /// contract.
    pub fn unresolved(language: Language, expiry_date: Option<String>) -> Self {
        let record = Self {
            name: String::new(),
            usage: String::new(),
            warnings: String::new(),
            dosage: String::new(),
            side_effects: String::new(),
            expiry_date: expiry_date.unwrap_or_default(),
            common_names: Vec::new(),
            timestamp: Utc::now(),
            language,
        };
        record.normalized(language)
    }

    /// Enforce the presentation invariant: every textual field non-empty.
    ///
    /// Empty fields are replaced with the localized sentinel for `language`
    /// and the record is stamped with that language. Idempotent.
    pub fn normalized(mut self, language: Language) -> Self {
        let strings = language.strings();
        fill(&mut self.name, strings.not_found);
        fill(&mut self.usage, strings.not_found);
        fill(&mut self.warnings, strings.not_found);
        fill(&mut self.dosage, strings.not_found);
        fill(&mut self.side_effects, strings.not_found);
        self.language = language;
        self
    }

    /// Whether the name field holds genuine data rather than a sentinel.
    pub fn is_resolved(&self) -> bool {
        let strings = self.language.strings();
        !self.name.is_empty()
            && self.name != strings.not_found
            && self.name != strings.unknown_medicine
    }
}

fn fill(field: &mut String, sentinel: &str) {
    if field.trim().is_empty() {
        *field = sentinel.to_string();
    }
}

/// Outcome of a local lookup-table match.
///
/// Explicit tagged type so callers handle both cases exhaustively instead of
/// null-checking field by field.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// A table entry matched; the record carries its localized fields.
    Found(MedicineRecord),
    /// No entry matched. Date extraction still ran and is reported.
    NotFound { expiry_date: Option<String> },
}
