//! Request/response envelope and checker report types.
//!
//! `VerifyRequest` and `VerifyResponse` are the plain structured payload the
//! surrounding service layer speaks. `SafetyReport` is the checker's own
//! result before the envelope adds the echoed drug list.

use serde::{Deserialize, Serialize};

use crate::{
    alert::{AlternativeSuggestion, DosageAlert, InteractionAlert},
    drug::{Drug, Patient},
};

/// Unique identifier for a single verification request.
///
/// Appears in every log line produced while handling the request, never in
/// the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub uuid::Uuid);

impl RequestId {
    /// Create a new, unique request ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

/// A prescription-verification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub patient: Patient,
    /// Drugs named explicitly by the caller.
    #[serde(default)]
    pub drugs: Vec<Drug>,
    /// Optional free text (e.g. OCR output) to extract further drugs from.
    #[serde(default)]
    pub text_input: Option<String>,
}

/// The combined safety verdict for one prescription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// True iff no interaction alerts and no dosage alerts were raised.
    pub is_safe: bool,
    /// Every drug that was checked: the caller's list plus extracted mentions.
    #[serde(default)]
    pub extracted_drugs: Vec<Drug>,
    #[serde(default)]
    pub interactions: Vec<InteractionAlert>,
    #[serde(default)]
    pub dosage_alerts: Vec<DosageAlert>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeSuggestion>,
}

impl VerifyResponse {
    /// The all-empty, safe response returned when there is nothing to check.
    pub fn empty() -> Self {
        Self {
            is_safe: true,
            extracted_drugs: Vec::new(),
            interactions: Vec::new(),
            dosage_alerts: Vec::new(),
            alternatives: Vec::new(),
        }
    }
}

/// The checker's aggregated findings for one drug list and patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyReport {
    /// True iff both alert lists are empty. Alternatives never affect this.
    pub is_safe: bool,
    pub interactions: Vec<InteractionAlert>,
    pub dosage_alerts: Vec<DosageAlert>,
    pub alternatives: Vec<AlternativeSuggestion>,
}
