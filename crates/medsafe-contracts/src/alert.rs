//! Alert and suggestion output types.
//!
//! These are the structured findings the checker emits. They are plain data
//! — how a severity or a suggestion is derived belongs to the table crates.

use serde::{Deserialize, Serialize};

/// How serious an interaction is considered.
///
/// Serialized lowercase ("high", "medium", "low") to match the wire format
/// consumers already parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// A known adverse interaction between two drugs on the prescription.
///
/// `drug_a` and `drug_b` carry the names as the caller wrote them, arranged
/// in the order the pair was registered in the interaction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionAlert {
    pub drug_a: String,
    pub drug_b: String,
    /// The stored clinical description of the interaction.
    pub description: String,
    pub severity: Severity,
}

/// An age-related dosage finding for a single drug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DosageAlert {
    /// The drug the finding applies to.
    pub drug: String,
    /// What the finding is, e.g. "Age-appropriate dosage recommendation".
    pub issue: String,
    /// The recommended dosage text, when one exists.
    #[serde(default)]
    pub recommended_dosage: Option<String>,
}

/// A recommendation to substitute one drug for another.
///
/// `reason` is copied from the alert that triggered the suggestion — it is
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeSuggestion {
    pub original_drug: String,
    pub suggested_drug: String,
    pub reason: String,
}
