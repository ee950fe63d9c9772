//! Regex-based drug mention extraction.
//!
//! Two passes over the input:
//!
//! 1. **Lexicon pass** — every known drug name present as a substring of the
//!    lowercased text becomes a mention, with best-effort dosage (adjacent
//!    "drug NNNmg" / "NNNmg drug") and frequency (nearest dosing term)
//!    extraction.
//! 2. **Pattern pass** — generic prescription shapes ("Name 500mg",
//!    "Name tablets of 500mg", "Rx: Name", "Take Name") catch drugs the
//!    lexicon does not know. Names already found are skipped; frequency
//!    falls back to a same-sentence term scan.
//!
//! The final list is deduplicated by lowercased name, first occurrence wins.
//! Extraction is best-effort throughout: unrecognizable input produces an
//! empty list, never an error.

use regex::Regex;
use tracing::debug;

use medsafe_contracts::{
    drug::DrugMention,
    error::{MedSafeError, MedSafeResult},
};
use medsafe_core::traits::TextExtractor;

use crate::lexicon::DRUG_LEXICON;

/// Dosing frequency terms recognized near a drug name, checked in order.
const FREQUENCY_TERMS: [&str; 9] = [
    "once", "twice", "thrice", "daily", "every day", "qd", "bid", "tid", "qid",
];

/// The generic prescription shapes of the pattern pass.
///
/// All case-insensitive; group 1 is the candidate name, group 2 (when
/// present) the dosage.
const MENTION_PATTERNS: [&str; 4] = [
    r"(?i)\b([A-Z][a-z]+(?:[A-Z][a-z]+)*)\s*(\d+\s*mg)\s*(?:once|twice|daily|bid|tid|qid)?",
    r"(?i)\b([A-Z][a-z]+(?:[A-Z][a-z]+)*)\s*(?:tablets?|capsules?)\s*(?:of\s*)?(\d+\s*mg)?",
    r"(?i)Rx:\s*([A-Z][a-z]+(?:[A-Z][a-z]+)*)\s*(\d+\s*mg)?",
    r"(?i)Take\s+([A-Z][a-z]+(?:[A-Z][a-z]+)*)\s*(\d+\s*mg)?",
];

/// Uppercase the first character, lowercase the rest.
fn title_word(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// The built-in lexicon + pattern extractor.
pub struct RegexExtractor {
    mention_patterns: Vec<Regex>,
    sentence_split: Regex,
}

impl RegexExtractor {
    /// Compile the extraction patterns.
    ///
    /// Returns `MedSafeError::Config` if a pattern fails to compile, which
    /// indicates a broken build rather than bad input.
    pub fn new() -> MedSafeResult<Self> {
        let mention_patterns = MENTION_PATTERNS
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| MedSafeError::Config {
                    reason: format!("failed to compile mention pattern: {}", e),
                })
            })
            .collect::<MedSafeResult<Vec<_>>>()?;

        let sentence_split = Regex::new(r"[.!?]").map_err(|e| MedSafeError::Config {
            reason: format!("failed to compile sentence splitter: {}", e),
        })?;

        Ok(Self {
            mention_patterns,
            sentence_split,
        })
    }

    // ── Lexicon-pass helpers ──────────────────────────────────────────────────

    /// Dosage written adjacent to the drug name: "aspirin 500 mg" or
    /// "500 mg aspirin".
    fn dosage_for_drug(&self, text_lower: &str, drug: &str) -> Option<String> {
        let escaped = regex::escape(drug);
        for pattern in [
            format!(r"{escaped}\s+(\d+\s*mg)"),
            format!(r"(\d+\s*mg)\s+{escaped}"),
        ] {
            let re = Regex::new(&pattern).ok()?;
            if let Some(caps) = re.captures(text_lower) {
                return caps.get(1).map(|m| m.as_str().to_string());
            }
        }
        None
    }

    /// Nearest frequency term before or after the drug name.
    fn frequency_for_drug(&self, text_lower: &str, drug: &str) -> Option<String> {
        let escaped = regex::escape(drug);
        let terms = FREQUENCY_TERMS.join("|");
        for pattern in [
            format!(r"{escaped}.*?({terms})"),
            format!(r"({terms}).*?{escaped}"),
        ] {
            let re = Regex::new(&pattern).ok()?;
            if let Some(caps) = re.captures(text_lower) {
                return caps.get(1).map(|m| m.as_str().to_string());
            }
        }
        None
    }

    // ── Pattern-pass helper ───────────────────────────────────────────────────

    /// Frequency term appearing in the same sentence as the drug name.
    fn frequency_in_sentence(&self, text_lower: &str, drug_lower: &str) -> Option<String> {
        for sentence in self.sentence_split.split(text_lower) {
            if !sentence.contains(drug_lower) {
                continue;
            }
            for term in FREQUENCY_TERMS {
                if sentence.contains(term) {
                    return Some(term.to_string());
                }
            }
        }
        None
    }
}

impl TextExtractor for RegexExtractor {
    fn extract_drug_mentions(&self, text: &str) -> Vec<DrugMention> {
        if text.is_empty() {
            return Vec::new();
        }

        let text_lower = text.to_lowercase();
        let mut found: Vec<DrugMention> = Vec::new();

        // ── Pass 1: lexicon substring scan ───────────────────────────────────
        for drug in DRUG_LEXICON {
            if !text_lower.contains(drug) {
                continue;
            }
            found.push(DrugMention {
                name: title_word(drug),
                dosage: self.dosage_for_drug(&text_lower, drug),
                frequency: self.frequency_for_drug(&text_lower, drug),
            });
        }

        // ── Pass 2: generic prescription shapes ──────────────────────────────
        for pattern in &self.mention_patterns {
            for caps in pattern.captures_iter(text) {
                let Some(raw_name) = caps.get(1) else { continue };
                let name = title_word(raw_name.as_str());

                // Names the lexicon pass (or an earlier pattern) already
                // produced are skipped, keeping the richer first mention.
                if found
                    .iter()
                    .any(|mention| mention.name.to_lowercase() == name.to_lowercase())
                {
                    continue;
                }

                let dosage = caps.get(2).map(|m| m.as_str().to_string());
                let frequency = self.frequency_in_sentence(&text_lower, &name.to_lowercase());
                found.push(DrugMention {
                    name,
                    dosage,
                    frequency,
                });
            }
        }

        // ── Final dedup: first occurrence per lowercased name wins ───────────
        let mut unique: Vec<DrugMention> = Vec::with_capacity(found.len());
        let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
        for mention in found {
            if seen.insert(mention.name.to_lowercase()) {
                unique.push(mention);
            }
        }

        debug!(
            mention_count = unique.len(),
            text_len = text.len(),
            "drug mention extraction complete"
        );
        unique
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
