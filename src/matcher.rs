//! Local matcher: resolve free text against the medicine table without any
//! network call.
//!
//! Matching is substring containment, not token matching. That is a
//! deliberate trade-off carried over from the product: "Dolo 650" on a
//! package matches the `dolo` alias, at the accepted cost of occasional
//! false positives when a short alias (e.g. "amox", "zith") appears inside
//! an unrelated word.

use crate::i18n::Language;
use crate::lookup::MedicineTable;
use crate::record::{MedicineRecord, Resolution};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// `D[-/]D[-/]Y` (1-2 digit day/month, 2-4 digit year), the month/year form
/// `M[-/]Y` common on blister packs ("12/2025"), or `D Mon Y` with an
/// optionally spelled-out month. The full three-part alternative comes first
/// so it wins over the month/year form at the same start position.
/// Format-matching only: 31/02/2025 passes.
const DATE_PATTERN: &str = r"(?i)\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|\d{1,2}[-/]\d{2,4}|\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{2,4}";

fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(DATE_PATTERN).expect("date pattern should compile"))
}

/// Extract the first date-like substring from `text`, if any.
///
/// Only the first match is used; calendar correctness is not enforced.
pub fn extract_expiry_date(text: &str) -> Option<String> {
    date_regex().find(text).map(|m| m.as_str().to_string())
}

/// Scan `text` for any lookup-table entry and return its localized record.
///
/// The candidate set per entry is the canonical key, the localized name for
/// the active language when one exists, and every alias — all compared
/// lowercase. The first entry in table-declaration order wins; there is no
/// ranking. Date extraction runs independently of name matching, so a
/// `NotFound` result still reports any date found in the text.
pub fn match_text(table: &MedicineTable, text: &str, language: Language) -> Resolution {
    let expiry_date = extract_expiry_date(text);
    let lower_text = text.to_lowercase();

    if lower_text.trim().is_empty() {
        return Resolution::NotFound { expiry_date };
    }

    for entry in table.entries() {
        let localized_name = entry.name_in(language).to_lowercase();
        let matched = lower_text.contains(entry.key)
            || lower_text.contains(&localized_name)
            || entry
                .aliases
                .iter()
                .any(|alias| lower_text.contains(&alias.to_lowercase()));

        if matched {
            debug!(medicine = entry.key, "local match");
            return Resolution::Found(MedicineRecord::from_entry(
                entry,
                language,
                expiry_date,
            ));
        }
    }

    Resolution::NotFound { expiry_date }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MedicineTable;
    use proptest::prelude::*;

    fn builtin() -> &'static MedicineTable {
        MedicineTable::builtin()
    }

    // ==================== Name Matching Tests ====================

    #[test]
    fn test_matches_alias_with_date() {
        // Canonical example from the product: a Dolo 650 package
        let result = match_text(
            builtin(),
            "Contains Dolo 650, use before 12/2025",
            Language::ENGLISH,
        );

        match result {
            Resolution::Found(record) => {
                assert_eq!(record.name, "Paracetamol");
                assert_eq!(record.usage, "For fever and pain relief");
                assert_eq!(record.warnings, "Do not exceed recommended dosage");
                assert_eq!(record.expiry_date, "12/2025");
            }
            Resolution::NotFound { .. } => panic!("expected a match"),
        }
    }

    #[test]
    fn test_matches_canonical_key_case_insensitively() {
        let result = match_text(builtin(), "PARACETAMOL 500MG TABLETS", Language::ENGLISH);
        assert!(matches!(result, Resolution::Found(r) if r.name == "Paracetamol"));
    }

    #[test]
    fn test_matches_localized_hindi_name() {
        let result = match_text(builtin(), "इसमें पैरासिटामोल है", Language::HINDI);
        match result {
            Resolution::Found(record) => {
                assert_eq!(record.name, "पैरासिटामोल");
                assert_eq!(record.language, Language::HINDI);
            }
            Resolution::NotFound { .. } => panic!("expected a match"),
        }
    }

    #[test]
    fn test_hindi_match_on_english_alias_returns_hindi_fields() {
        let result = match_text(builtin(), "Crocin Advance 500", Language::HINDI);
        assert!(matches!(result, Resolution::Found(r) if r.name == "पैरासिटामोल"));
    }

    #[test]
    fn test_first_declaration_order_match_wins() {
        // Both paracetamol (first) and ibuprofen (third) appear; the earlier
        // table entry is returned, no ranking
        let result = match_text(
            builtin(),
            "combination of ibuprofen and paracetamol",
            Language::ENGLISH,
        );
        assert!(matches!(result, Resolution::Found(r) if r.name == "Paracetamol"));
    }

    #[test]
    fn test_substring_containment_accepts_embedded_alias() {
        // Documented trade-off: "amox" matches inside an unrelated word
        let result = match_text(builtin(), "pharmamox labs packaging", Language::ENGLISH);
        assert!(matches!(result, Resolution::Found(r) if r.name == "Amoxicillin"));
    }

    #[test]
    fn test_unrecognized_text_is_not_found() {
        let result = match_text(builtin(), "just a plain shopping list", Language::ENGLISH);
        assert!(matches!(result, Resolution::NotFound { expiry_date: None }));
    }

    #[test]
    fn test_empty_text_is_not_found_with_no_date() {
        let result = match_text(builtin(), "", Language::ENGLISH);
        assert!(matches!(result, Resolution::NotFound { expiry_date: None }));
    }

    // ==================== Date Extraction Tests ====================

    #[test]
    fn test_extracts_slash_date() {
        assert_eq!(
            extract_expiry_date("EXP 12/2025 LOT 442").as_deref(),
            Some("12/2025")
        );
    }

    #[test]
    fn test_extracts_month_year_date() {
        // The two-part form printed on blister packs
        assert_eq!(
            extract_expiry_date("use before 12/2025").as_deref(),
            Some("12/2025")
        );
        assert_eq!(
            extract_expiry_date("EXP 3-26 LOT 881").as_deref(),
            Some("3-26")
        );
    }

    #[test]
    fn test_full_date_wins_over_month_year_at_same_position() {
        assert_eq!(
            extract_expiry_date("exp 01/02/2025").as_deref(),
            Some("01/02/2025")
        );
    }

    #[test]
    fn test_extracts_dash_date() {
        assert_eq!(
            extract_expiry_date("best before 3-12-26").as_deref(),
            Some("3-12-26")
        );
    }

    #[test]
    fn test_extracts_month_name_date() {
        assert_eq!(
            extract_expiry_date("Expiry: 15 August 2026").as_deref(),
            Some("15 August 2026")
        );
        assert_eq!(
            extract_expiry_date("exp 1 jan 25").as_deref(),
            Some("1 jan 25")
        );
    }

    #[test]
    fn test_first_of_multiple_dates_wins() {
        assert_eq!(
            extract_expiry_date("MFD 01/2024 EXP 01/2026").as_deref(),
            Some("01/2024")
        );
    }

    #[test]
    fn test_invalid_calendar_date_still_matches() {
        // Pattern is format-matching, not format-validating
        assert_eq!(
            extract_expiry_date("use by 31/02/2025").as_deref(),
            Some("31/02/2025")
        );
    }

    #[test]
    fn test_no_date_in_text() {
        assert_eq!(extract_expiry_date("no dates here"), None);
    }

    #[test]
    fn test_not_found_still_reports_date() {
        let result = match_text(builtin(), "mystery pills, exp 10/2027", Language::ENGLISH);
        match result {
            Resolution::NotFound { expiry_date } => {
                assert_eq!(expiry_date.as_deref(), Some("10/2027"));
            }
            Resolution::Found(_) => panic!("expected NotFound"),
        }
    }

    // ==================== Property Tests ====================

    proptest! {
        /// Date extraction is idempotent: two runs over the same text agree.
        #[test]
        fn prop_date_extraction_idempotent(text in ".{0,200}") {
            prop_assert_eq!(extract_expiry_date(&text), extract_expiry_date(&text));
        }

        /// Any text containing a known alias matches that entry's record.
        #[test]
        fn prop_alias_substring_always_matches(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
            // "tylenol" belongs to paracetamol; earlier entries can't steal
            // the match since paracetamol is first in declaration order
            let text = format!("{}tylenol{}", prefix, suffix);
            let result = match_text(builtin(), &text, Language::ENGLISH);
            prop_assert!(matches!(result, Resolution::Found(r) if r.name == "Paracetamol"));
        }
    }
}
