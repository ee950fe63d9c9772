//! Cleanup of recognized prescription text.
//!
//! OCR output for handwritten or photographed prescriptions is noisy in
//! predictable ways: missing spaces around dosages ("500mg"), lowercased
//! dosing abbreviations ("qid"), and misread drug names. The cleaner fixes
//! the first two with regexes and snaps near-miss words to a medical
//! lexicon by 3-character prefix.

use regex::Regex;

use medsafe_contracts::error::{MedSafeError, MedSafeResult};

/// Medical vocabulary used by the prefix snap.
///
/// Order matters: the first lexicon word matching a misread word's prefix
/// wins. Abbreviations are uppercase and therefore never match a lowercased
/// prefix — the snap only rewrites drug-name-shaped words.
const MEDICAL_LEXICON: [&str; 44] = [
    "amoxicillin",
    "atorvastatin",
    "ibuprofen",
    "metformin",
    "lisinopril",
    "omeprazole",
    "warfarin",
    "aspirin",
    "acetaminophen",
    "prednisone",
    "tramadol",
    "gabapentin",
    "cephalexin",
    "azithromycin",
    "clarithromycin",
    "doxycycline",
    "metoprolol",
    "simvastatin",
    "amlodipine",
    "hydrochlorothiazide",
    "clopidogrel",
    "pantoprazole",
    "sertraline",
    "fluoxetine",
    "citalopram",
    "venlafaxine",
    "duloxetine",
    "albuterol",
    "montelukast",
    "fluticasone",
    "loratadine",
    "diphenhydramine",
    "mg",
    "mL",
    "mcg",
    "PO",
    "IV",
    "IM",
    "SC",
    "QID",
    "TID",
    "BID",
    "QD",
    "PRN",
];

/// Abbreviation and unit normalizations, applied on word boundaries,
/// case-insensitively.
const CORRECTIONS: [(&str, &str); 16] = [
    ("qid", "QID"),
    ("tid", "TID"),
    ("bid", "BID"),
    ("qd", "QD"),
    ("po", "PO"),
    ("iv", "IV"),
    ("im", "IM"),
    ("sc", "SC"),
    ("prn", "PRN"),
    ("mg", "mg"),
    ("ml", "mL"),
    ("mcg", "mcg"),
    ("tab", "tablet"),
    ("caps", "capsule"),
    ("disp", "dispense"),
    ("sig", "instructions"),
];

/// The recognized-text cleaner.
pub struct TextCleaner {
    digit_letter: Regex,
    letter_digit: Regex,
    corrections: Vec<(Regex, &'static str)>,
}

impl TextCleaner {
    /// Compile the cleanup patterns.
    pub fn new() -> MedSafeResult<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| MedSafeError::Config {
                reason: format!("failed to compile ocr cleanup pattern: {}", e),
            })
        };

        let corrections = CORRECTIONS
            .iter()
            .map(|(term, replacement)| {
                compile(&format!(r"(?i)\b{}\b", regex::escape(term)))
                    .map(|re| (re, *replacement))
            })
            .collect::<MedSafeResult<Vec<_>>>()?;

        Ok(Self {
            digit_letter: compile(r"(\d)([a-zA-Z])")?,
            letter_digit: compile(r"([a-zA-Z])(\d)")?,
            corrections,
        })
    }

    /// Fix spacing around dosages and normalize abbreviations.
    ///
    /// "500mg" becomes "500 mg", "mg500" becomes "mg 500", then the
    /// correction table rewrites dosing abbreviations and unit casings.
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let spaced = self.digit_letter.replace_all(text, "$1 $2");
        let spaced = self.letter_digit.replace_all(&spaced, "$1 $2");

        let mut cleaned = spaced.into_owned();
        for (pattern, replacement) in &self.corrections {
            cleaned = pattern.replace_all(&cleaned, *replacement).into_owned();
        }
        cleaned
    }

    /// Snap misread words to the medical lexicon.
    ///
    /// A word of three or more characters whose lowercased first three
    /// characters prefix a lexicon entry is replaced by that entry. Words
    /// with no match pass through unchanged.
    pub fn snap_to_lexicon(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| {
                let word_lower = word.to_lowercase();
                if word_lower.chars().count() < 3 {
                    return word.to_string();
                }
                let prefix: String = word_lower.chars().take(3).collect();
                MEDICAL_LEXICON
                    .iter()
                    .find(|entry| entry.starts_with(&prefix))
                    .map(|entry| entry.to_string())
                    .unwrap_or_else(|| word.to_string())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
