//! The request-scoped verification service.
//!
//! `VerificationService` is the envelope layer above the checker: it merges
//! explicitly named drugs with mentions extracted from free text, runs the
//! safety check, and assembles the response payload. It is infallible by
//! construction — extraction is best-effort and the lookups cannot fail —
//! so the only `Err` paths live on the optional advice collaborator.

use tracing::{debug, info};

use medsafe_contracts::{
    advice::AdviceReport,
    drug::Drug,
    error::{MedSafeError, MedSafeResult},
    report::{RequestId, VerifyRequest, VerifyResponse},
};

use crate::{
    checker::SafetyChecker,
    traits::{AdviceGenerator, TextExtractor},
};

/// The prescription-verification service.
///
/// One instance serves any number of concurrent requests: the checker's
/// tables are immutable and the extractor is stateless.
pub struct VerificationService {
    checker: SafetyChecker,
    extractor: Box<dyn TextExtractor>,
    advice: Option<Box<dyn AdviceGenerator>>,
}

impl VerificationService {
    /// Create a service over a checker and a text extractor.
    pub fn new(checker: SafetyChecker, extractor: Box<dyn TextExtractor>) -> Self {
        Self {
            checker,
            extractor,
            advice: None,
        }
    }

    /// Attach a free-text analysis collaborator.
    pub fn with_advice_generator(mut self, generator: Box<dyn AdviceGenerator>) -> Self {
        self.advice = Some(generator);
        self
    }

    /// Verify one prescription request.
    ///
    /// The checked drug list is the caller's `drugs` followed by every
    /// mention extracted from `text_input` (in extraction order). An empty
    /// combined list short-circuits to the all-empty safe response.
    pub fn verify(&self, request: &VerifyRequest) -> VerifyResponse {
        let request_id = RequestId::new();

        let mut drugs: Vec<Drug> = request.drugs.clone();

        if let Some(text) = request.text_input.as_deref() {
            let mentions = self.extractor.extract_drug_mentions(text);
            info!(
                request_id = %request_id.0,
                mention_count = mentions.len(),
                "extracted drug mentions from text"
            );
            drugs.extend(mentions.into_iter().map(Drug::from));
        }

        if drugs.is_empty() {
            debug!(request_id = %request_id.0, "nothing to check, returning safe response");
            return VerifyResponse::empty();
        }

        let report = self.checker.verify(&drugs, &request.patient);

        info!(
            request_id = %request_id.0,
            is_safe = report.is_safe,
            checked = drugs.len(),
            "verification complete"
        );

        VerifyResponse {
            is_safe: report.is_safe,
            extracted_drugs: drugs,
            interactions: report.interactions,
            dosage_alerts: report.dosage_alerts,
            alternatives: report.alternatives,
        }
    }

    /// Generate free-text advice for a prescription via the configured
    /// collaborator.
    ///
    /// Returns `MedSafeError::Advice` when no generator is attached.
    pub fn generate_advice(
        &self,
        prescription_text: &str,
        patient_age: u32,
    ) -> MedSafeResult<AdviceReport> {
        let generator = self.advice.as_ref().ok_or_else(|| MedSafeError::Advice {
            reason: "no advice generator configured".to_string(),
        })?;
        generator.generate_advice(prescription_text, patient_age)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
