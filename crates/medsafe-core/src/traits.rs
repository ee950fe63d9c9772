//! Core trait definitions for the MedSafe pipeline.
//!
//! Two families of seams:
//!
//! - Lookup sources (`InteractionSource`, `DosageSource`, `AlternativeSource`)
//!   — deterministic, read-only tables the checker drives. A miss is not an
//!   error; it produces an empty result.
//! - External collaborators (`TextExtractor`, `OcrEngine`, `AdviceGenerator`)
//!   — best-effort services that may block or fail independently of the
//!   deterministic core.
//!
//! All implementations must be `Send + Sync`: the tables are immutable after
//! construction, so concurrent requests against one instance are safe by
//! construction and need no coordination.

use medsafe_contracts::{
    advice::AdviceReport,
    alert::{AlternativeSuggestion, DosageAlert, InteractionAlert},
    drug::{Drug, DrugMention},
    error::MedSafeResult,
};

/// A source of known adverse drug-pair interactions.
pub trait InteractionSource: Send + Sync {
    /// Check every unordered pair in `drugs` and return one alert per known
    /// interaction, in pair-iteration order (i < j over the input list).
    ///
    /// Matching is by lowercased name, exact only. Duplicate names in the
    /// input produce one comparison per index pair and therefore duplicate
    /// alerts — implementations must not deduplicate.
    ///
    /// `age` is available to implementations that stratify interactions by
    /// patient age; the built-in formulary table does not consult it.
    fn find_interactions(&self, drugs: &[Drug], age: u32) -> Vec<InteractionAlert>;
}

/// A source of age-banded dosage recommendations.
pub trait DosageSource: Send + Sync {
    /// Return every dosage finding for one drug at the given patient age.
    ///
    /// A drug can legitimately produce more than one alert (a general
    /// recommendation plus a pediatric contraindication). Order within the
    /// returned list is part of the contract and is preserved downstream.
    fn find_dosage_alerts(&self, drug: &Drug, age: u32) -> Vec<DosageAlert>;
}

/// A source of substitute-drug suggestions.
pub trait AlternativeSource: Send + Sync {
    /// Suggest substitutes for `drug`, in preference order.
    ///
    /// `reason` is the issue text of the alert that flagged the drug; it is
    /// copied into each suggestion verbatim, never recomputed.
    fn find_alternatives(&self, drug: &Drug, reason: &str) -> Vec<AlternativeSuggestion>;
}

/// Extracts drug mentions from free prescription text.
///
/// Implementations are best-effort: malformed or unrecognizable input yields
/// an empty list, never an error.
pub trait TextExtractor: Send + Sync {
    fn extract_drug_mentions(&self, text: &str) -> Vec<DrugMention>;
}

/// Extracts raw text from a prescription image.
///
/// The engine is a black box (local OCR binary, vision model, remote
/// service). Faults surface as `MedSafeError::Ocr` so callers can tell a
/// failed extraction apart from an image that simply contains no text —
/// an empty `Ok` string is a valid best-effort result.
pub trait OcrEngine: Send + Sync {
    fn extract_text(&self, image: &[u8]) -> MedSafeResult<String>;
}

/// Generates free-text clinical advice for a prescription.
///
/// Backed by an external language model. Advisory only — output never feeds
/// back into the deterministic table lookups.
pub trait AdviceGenerator: Send + Sync {
    fn generate_advice(
        &self,
        prescription_text: &str,
        patient_age: u32,
    ) -> MedSafeResult<AdviceReport>;
}
