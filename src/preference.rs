//! Persisted language preference: the single stored key.
//!
//! One JSON file holding the last-selected language code, read once at
//! startup and rewritten on every language change. A missing or corrupt file
//! falls back to English, like every other language-code failure.

use crate::i18n::Language;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    #[serde(rename = "selectedLanguage")]
    selected_language: String,
}

/// Load the stored language preference, failing closed to English.
pub fn load(path: &Path) -> Language {
    let code = std::fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str::<StoredPreference>(&contents).ok())
        .map(|stored| stored.selected_language)
        .unwrap_or_default();

    debug!("loaded language preference: {:?}", code);
    Language::from_code(&code)
}

/// Persist the selected language, creating parent directories as needed.
pub fn store(path: &Path, language: Language) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let stored = StoredPreference {
        selected_language: language.code().to_string(),
    };
    let contents = serde_json::to_string(&stored).context("Failed to serialize preference")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
