//! Static medicine reference data.
//!
//! The built-in table is a stand-in for a real backing store: it is loaded
//! once, immutable for the life of the process, and only read through
//! [`MedicineTable::entries`]. Anything that satisfies the same read contract
//! (a real database, a fixture table in tests) can be injected in its place.

use crate::i18n::Language;
use std::sync::OnceLock;

/// One known medicine with its bilingual fields.
///
/// Hindi variants are optional; entries without them fall back to the
/// English text when rendered in Hindi. Aliases are stored lowercase and
/// compared case-insensitively.
#[derive(Debug, Clone)]
pub struct LookupEntry {
    /// Canonical key, lowercase (e.g., "paracetamol")
    pub key: &'static str,
    pub name: &'static str,
    pub usage: &'static str,
    pub warnings: &'static str,
    pub dosage: &'static str,
    pub side_effects: &'static str,
    /// Brand names and common spellings, lowercase
    pub aliases: &'static [&'static str],
    pub name_hi: Option<&'static str>,
    pub usage_hi: Option<&'static str>,
    pub warnings_hi: Option<&'static str>,
    pub dosage_hi: Option<&'static str>,
    pub side_effects_hi: Option<&'static str>,
}

impl LookupEntry {
    /// Localized name, falling back to English when no Hindi variant exists.
    pub fn name_in(&self, language: Language) -> &'static str {
        self.pick(language, self.name, self.name_hi)
    }

    pub fn usage_in(&self, language: Language) -> &'static str {
        self.pick(language, self.usage, self.usage_hi)
    }

    pub fn warnings_in(&self, language: Language) -> &'static str {
        self.pick(language, self.warnings, self.warnings_hi)
    }

    pub fn dosage_in(&self, language: Language) -> &'static str {
        self.pick(language, self.dosage, self.dosage_hi)
    }

    pub fn side_effects_in(&self, language: Language) -> &'static str {
        self.pick(language, self.side_effects, self.side_effects_hi)
    }

    fn pick(
        &self,
        language: Language,
        english: &'static str,
        hindi: Option<&'static str>,
    ) -> &'static str {
        if language == Language::HINDI {
            hindi.unwrap_or(english)
        } else {
            english
        }
    }
}

/// Immutable, injected read-only medicine data source.
///
/// Iteration order is declaration order; the matcher relies on that for its
/// first-match-wins rule.
#[derive(Debug, Clone)]
pub struct MedicineTable {
    entries: Vec<LookupEntry>,
}

static BUILTIN: OnceLock<MedicineTable> = OnceLock::new();

impl MedicineTable {
    /// Build a table from explicit entries (used by tests and any real
    /// backing store adapter).
    pub fn new(entries: Vec<LookupEntry>) -> Self {
        Self { entries }
    }

    /// The built-in sample dataset, fixed at build time.
    pub fn builtin() -> &'static MedicineTable {
        BUILTIN.get_or_init(|| MedicineTable {
            entries: builtin_entries(),
        })
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shorthand for the common case of an English-only entry.
const fn entry(
    key: &'static str,
    name: &'static str,
    usage: &'static str,
    warnings: &'static str,
    dosage: &'static str,
    side_effects: &'static str,
    aliases: &'static [&'static str],
) -> LookupEntry {
    LookupEntry {
        key,
        name,
        usage,
        warnings,
        dosage,
        side_effects,
        aliases,
        name_hi: None,
        usage_hi: None,
        warnings_hi: None,
        dosage_hi: None,
        side_effects_hi: None,
    }
}

fn builtin_entries() -> Vec<LookupEntry> {
    vec![
        LookupEntry {
            key: "paracetamol",
            name: "Paracetamol",
            usage: "For fever and pain relief",
            warnings: "Do not exceed recommended dosage",
            dosage: "500-1000mg every 4-6 hours",
            side_effects: "Rare side effects include allergic reactions",
            aliases: &["acetaminophen", "tylenol", "dolo", "crocin", "calpol"],
            name_hi: Some("पैरासिटामोल"),
            usage_hi: Some("बुखार और दर्द से राहत के लिए"),
            warnings_hi: Some("अनुशंसित खुराक से अधिक न लें"),
            dosage_hi: Some("500-1000 मिलीग्राम हर 4-6 घंटे में"),
            side_effects_hi: Some("दुर्लभ दुष्प्रभावों में एलर्जी प्रतिक्रियाएं शामिल हैं"),
        },
        LookupEntry {
            key: "amoxicillin",
            name: "Amoxicillin",
            usage: "Antibiotic for bacterial infections",
            warnings: "Complete full course as prescribed",
            dosage: "250-500mg three times daily",
            side_effects: "May cause diarrhea, nausea, or allergic reactions",
            aliases: &["amox", "amoxycillin", "novamox"],
            name_hi: Some("एमोक्सिसिलिन"),
            usage_hi: Some("बैक्टीरियल संक्रमण के लिए एंटीबायोटिक"),
            warnings_hi: Some("निर्धारित पूरा कोर्स पूरा करें"),
            dosage_hi: Some("250-500 मिलीग्राम दिन में तीन बार"),
            side_effects_hi: Some("दस्त, मतली या एलर्जी प्रतिक्रियाएं हो सकती हैं"),
        },
        LookupEntry {
            key: "ibuprofen",
            name: "Ibuprofen",
            usage: "For pain relief and reducing inflammation",
            warnings: "Take with food to avoid stomach upset",
            dosage: "200-400mg every 4-6 hours",
            side_effects: "May cause stomach pain, heartburn, or dizziness",
            aliases: &["brufen", "advil", "nurofen"],
            name_hi: Some("आइबुप्रोफेन"),
            usage_hi: Some("दर्द से राहत और सूजन कम करने के लिए"),
            warnings_hi: Some("पेट की परेशानी से बचने के लिए भोजन के साथ लें"),
            dosage_hi: Some("200-400 मिलीग्राम हर 4-6 घंटे में"),
            side_effects_hi: Some("पेट दर्द, सीने में जलन या चक्कर आ सकते हैं"),
        },
        LookupEntry {
            key: "omeprazole",
            name: "Omeprazole",
            usage: "For acid reflux and stomach ulcers",
            warnings: "Take before meals",
            dosage: "20-40mg once daily",
            side_effects: "May cause headache or diarrhea",
            aliases: &["prilosec", "losec", "omee"],
            name_hi: Some("ओमेप्राज़ोल"),
            usage_hi: Some("एसिड रिफ्लक्स और पेट के अल्सर के लिए"),
            warnings_hi: Some("भोजन से पहले लें"),
            dosage_hi: Some("20-40 मिलीग्राम दिन में एक बार"),
            side_effects_hi: Some("सिरदर्द या दस्त हो सकते हैं"),
        },
        LookupEntry {
            key: "metformin",
            name: "Metformin",
            usage: "For type 2 diabetes",
            warnings: "Take with meals",
            dosage: "500-2000mg daily in divided doses",
            side_effects: "May cause gastrointestinal upset",
            aliases: &["glucophage", "metfor"],
            name_hi: Some("मेटफॉर्मिन"),
            usage_hi: Some("टाइप 2 मधुमेह के लिए"),
            warnings_hi: Some("भोजन के साथ लें"),
            dosage_hi: Some("500-2000 मिलीग्राम दिन में विभाजित खुराक में"),
            side_effects_hi: Some("पेट की परेशानी हो सकती है"),
        },
        entry(
            "atorvastatin",
            "Atorvastatin",
            "For high cholesterol",
            "Take in the evening",
            "10-80mg once daily",
            "May cause muscle pain or weakness",
            &["lipitor", "atorva"],
        ),
        entry(
            "amitriptyline",
            "Amitriptyline",
            "For depression and nerve pain",
            "May cause drowsiness",
            "10-150mg daily",
            "Dry mouth, drowsiness, weight gain",
            &["elavil", "tryptomer"],
        ),
        entry(
            "azithromycin",
            "Azithromycin",
            "Antibiotic for bacterial infections",
            "Take on empty stomach",
            "500mg once daily for 3 days",
            "May cause stomach upset or diarrhea",
            &["zithromax", "zith"],
        ),
        entry(
            "cetirizine",
            "Cetirizine",
            "For allergies and hay fever",
            "May cause drowsiness",
            "10mg once daily",
            "Drowsiness, dry mouth",
            &["zyrtec", "cetzine"],
        ),
        entry(
            "ciprofloxacin",
            "Ciprofloxacin",
            "Antibiotic for bacterial infections",
            "Avoid dairy products",
            "250-750mg twice daily",
            "May cause nausea or diarrhea",
            &["cipro", "ciprobid"],
        ),
        entry(
            "diclofenac",
            "Diclofenac",
            "For pain and inflammation",
            "Take with food",
            "50-100mg daily in divided doses",
            "Stomach pain, heartburn",
            &["voltaren", "diclomol"],
        ),
        entry(
            "esomeprazole",
            "Esomeprazole",
            "For acid reflux",
            "Take before meals",
            "20-40mg once daily",
            "Headache, diarrhea",
            &["nexium", "esome"],
        ),
        entry(
            "fluoxetine",
            "Fluoxetine",
            "For depression and anxiety",
            "May take weeks to work",
            "20-80mg daily",
            "Nausea, insomnia, anxiety",
            &["prozac", "flunil"],
        ),
        entry(
            "furosemide",
            "Furosemide",
            "For high blood pressure and edema",
            "Take in the morning",
            "20-80mg daily",
            "Frequent urination, dehydration",
            &["lasix", "frusemide"],
        ),
        entry(
            "gabapentin",
            "Gabapentin",
            "For nerve pain and seizures",
            "May cause drowsiness",
            "300-1800mg daily in divided doses",
            "Drowsiness, dizziness",
            &["neurontin", "gabapin"],
        ),
        entry(
            "hydrochlorothiazide",
            "Hydrochlorothiazide",
            "For high blood pressure",
            "Take in the morning",
            "12.5-50mg daily",
            "Frequent urination, dehydration",
            &["hctz", "hydrodiuril"],
        ),
        entry(
            "levothyroxine",
            "Levothyroxine",
            "For hypothyroidism",
            "Take on empty stomach",
            "25-200mcg daily",
            "Heart palpitations, weight loss",
            &["synthroid", "euthyrox"],
        ),
        entry(
            "lisinopril",
            "Lisinopril",
            "For high blood pressure",
            "May cause cough",
            "10-40mg daily",
            "Dry cough, dizziness",
            &["zestril", "prinivil"],
        ),
        entry(
            "loratadine",
            "Loratadine",
            "For allergies",
            "Non-drowsy formula",
            "10mg once daily",
            "Headache, dry mouth",
            &["claritin", "lorfast"],
        ),
        entry(
            "metoprolol",
            "Metoprolol",
            "For high blood pressure and angina",
            "Do not stop suddenly",
            "50-200mg daily",
            "Fatigue, cold hands/feet",
            &["lopressor", "toprol"],
        ),
        entry(
            "montelukast",
            "Montelukast",
            "For asthma and allergies",
            "Take in the evening",
            "10mg once daily",
            "Headache, stomach pain",
            &["singulair", "montair"],
        ),
        entry(
            "pantoprazole",
            "Pantoprazole",
            "For acid reflux",
            "Take before meals",
            "40mg once daily",
            "Headache, diarrhea",
            &["protonix", "pantocid"],
        ),
        entry(
            "prednisone",
            "Prednisone",
            "For inflammation and allergies",
            "Take with food",
            "5-60mg daily",
            "Weight gain, mood changes",
            &["deltasone", "prednisolone"],
        ),
        entry(
            "ranitidine",
            "Ranitidine",
            "For acid reflux",
            "Take before meals",
            "150-300mg twice daily",
            "Headache, constipation",
            &["zantac", "ranitin"],
        ),
        entry(
            "sertraline",
            "Sertraline",
            "For depression and anxiety",
            "May take weeks to work",
            "50-200mg daily",
            "Nausea, insomnia",
            &["zoloft", "sertral"],
        ),
        entry(
            "simvastatin",
            "Simvastatin",
            "For high cholesterol",
            "Take in the evening",
            "10-80mg once daily",
            "Muscle pain, weakness",
            &["zocor", "simva"],
        ),
        entry(
            "tramadol",
            "Tramadol",
            "For moderate to severe pain",
            "May cause drowsiness",
            "50-100mg every 4-6 hours",
            "Drowsiness, nausea",
            &["ultram", "tramal"],
        ),
        entry(
            "venlafaxine",
            "Venlafaxine",
            "For depression and anxiety",
            "Do not stop suddenly",
            "75-225mg daily",
            "Nausea, insomnia",
            &["effexor", "venlafax"],
        ),
        entry(
            "warfarin",
            "Warfarin",
            "Blood thinner",
            "Regular blood tests needed",
            "2-10mg daily",
            "Bleeding, bruising",
            &["coumadin", "warf"],
        ),
        entry(
            "zolpidem",
            "Zolpidem",
            "For insomnia",
            "Take only at bedtime",
            "5-10mg at bedtime",
            "Drowsiness, dizziness",
            &["ambien", "stilnoct"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_singleton() {
        assert!(std::ptr::eq(MedicineTable::builtin(), MedicineTable::builtin()));
    }

    #[test]
    fn test_builtin_table_size() {
        assert_eq!(MedicineTable::builtin().len(), 30);
    }

    #[test]
    fn test_paracetamol_is_first_entry() {
        // The matcher's first-match-wins rule depends on declaration order
        let first = &MedicineTable::builtin().entries()[0];
        assert_eq!(first.key, "paracetamol");
        assert!(first.aliases.contains(&"dolo"));
    }

    #[test]
    fn test_aliases_and_keys_are_lowercase() {
        for entry in MedicineTable::builtin().entries() {
            assert_eq!(entry.key, entry.key.to_lowercase(), "key: {}", entry.key);
            for alias in entry.aliases {
                assert_eq!(*alias, alias.to_lowercase(), "alias: {}", alias);
            }
        }
    }

    #[test]
    fn test_localized_fields_fall_back_to_english() {
        let warfarin = MedicineTable::builtin()
            .entries()
            .iter()
            .find(|e| e.key == "warfarin")
            .unwrap();

        // No Hindi variant recorded, so Hindi rendering uses English text
        assert_eq!(warfarin.name_in(Language::HINDI), "Warfarin");
        assert_eq!(warfarin.usage_in(Language::HINDI), "Blood thinner");
    }

    #[test]
    fn test_localized_fields_use_hindi_when_present() {
        let paracetamol = &MedicineTable::builtin().entries()[0];
        assert_eq!(paracetamol.name_in(Language::HINDI), "पैरासिटामोल");
        assert_eq!(paracetamol.name_in(Language::ENGLISH), "Paracetamol");
        assert_eq!(
            paracetamol.dosage_in(Language::HINDI),
            "500-1000 मिलीग्राम हर 4-6 घंटे में"
        );
    }

    #[test]
    fn test_english_fields_never_empty() {
        for entry in MedicineTable::builtin().entries() {
            assert!(!entry.name.is_empty());
            assert!(!entry.usage.is_empty());
            assert!(!entry.warnings.is_empty());
            assert!(!entry.dosage.is_empty());
            assert!(!entry.side_effects.is_empty());
        }
    }
}
