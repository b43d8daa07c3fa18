//! Presentation builders: narration text for speech synthesis and labeled
//! lines for display.
//!
//! Both derive their content from the record alone — no field is dropped,
//! no external state consulted. The actual speech synthesis and rendering
//! live outside the pipeline; this module only prepares their input.

use crate::record::MedicineRecord;

/// Text prepared for a speech-synthesis engine, with the voice to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    pub text: String,
    /// BCP-47 tag for voice selection ("en-US" or "hi-IN")
    pub voice: &'static str,
}

/// Build the spoken announcement for a record in its own language.
pub fn narration(record: &MedicineRecord) -> Narration {
    let strings = record.language.strings();
    let text = format!(
        "{} {}. {} {}. {} {}. {} {}. {} {}",
        strings.name_label,
        record.name,
        strings.usage_label,
        record.usage,
        strings.warnings_label,
        record.warnings,
        strings.dosage_label,
        record.dosage,
        strings.side_effects_label,
        record.side_effects,
    );
    Narration {
        text,
        voice: record.language.voice(),
    }
}

/// Labeled `(label, value)` lines for a result card, in display order.
///
/// Includes every record field: the five textual fields, the extracted
/// expiry date, and the scan timestamp. A record with no extracted expiry
/// date renders the localized "not available" sentinel on that line.
pub fn render_lines(record: &MedicineRecord) -> Vec<(&'static str, String)> {
    let strings = record.language.strings();
    let expiry = if record.expiry_date.trim().is_empty() {
        strings.not_available.to_string()
    } else {
        record.expiry_date.clone()
    };
    vec![
        (strings.name_label, record.name.clone()),
        (strings.usage_label, record.usage.clone()),
        (strings.warnings_label, record.warnings.clone()),
        (strings.dosage_label, record.dosage.clone()),
        (strings.side_effects_label, record.side_effects.clone()),
        (strings.expiry_label, expiry),
        (
            strings.scanned_at_label,
            record.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ),
    ]
}
