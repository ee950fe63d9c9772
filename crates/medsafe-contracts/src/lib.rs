//! # medsafe-contracts
//!
//! Shared types and error contracts for the MedSafe prescription checker.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod advice;
pub mod alert;
pub mod drug;
pub mod error;
pub mod report;

#[cfg(test)]
mod tests {
    use super::*;
    use alert::{DosageAlert, InteractionAlert, Severity};
    use drug::{Drug, DrugMention, Patient};
    use error::MedSafeError;
    use report::{RequestId, VerifyRequest, VerifyResponse};

    // ── Drug / DrugMention ───────────────────────────────────────────────────

    #[test]
    fn drug_named_carries_no_dosage_or_frequency() {
        let drug = Drug::named("Aspirin");
        assert_eq!(drug.name, "Aspirin");
        assert!(drug.dosage.is_none());
        assert!(drug.frequency.is_none());
    }

    #[test]
    fn mention_converts_to_drug_preserving_fields() {
        let mention = DrugMention {
            name: "Ibuprofen".to_string(),
            dosage: Some("200 mg".to_string()),
            frequency: Some("twice".to_string()),
        };

        let drug: Drug = mention.into();
        assert_eq!(drug.name, "Ibuprofen");
        assert_eq!(drug.dosage.as_deref(), Some("200 mg"));
        assert_eq!(drug.frequency.as_deref(), Some("twice"));
    }

    #[test]
    fn drug_deserializes_with_name_only() {
        let drug: Drug = serde_json::from_str(r#"{ "name": "Warfarin" }"#).unwrap();
        assert_eq!(drug.name, "Warfarin");
        assert!(drug.dosage.is_none());
    }

    #[test]
    fn patient_deserializes_with_age_only() {
        let patient: Patient = serde_json::from_str(r#"{ "age": 42 }"#).unwrap();
        assert_eq!(patient.age, 42);
        assert!(patient.weight_kg.is_none());
        assert!(patient.conditions.is_empty());
        assert!(patient.allergies.is_empty());
    }

    // ── Severity serde ───────────────────────────────────────────────────────

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Severity::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn interaction_alert_round_trips() {
        let original = InteractionAlert {
            drug_a: "Warfarin".to_string(),
            drug_b: "Ibuprofen".to_string(),
            description: "May increase risk of serious bleeding".to_string(),
            severity: Severity::High,
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: InteractionAlert = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn dosage_alert_round_trips_without_recommendation() {
        let original = DosageAlert {
            drug: "Aspirin".to_string(),
            issue: "Age-appropriate dosage recommendation".to_string(),
            recommended_dosage: None,
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: DosageAlert = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    // ── Envelope ─────────────────────────────────────────────────────────────

    #[test]
    fn verify_request_defaults_drugs_and_text() {
        let request: VerifyRequest =
            serde_json::from_str(r#"{ "patient": { "age": 30 } }"#).unwrap();
        assert!(request.drugs.is_empty());
        assert!(request.text_input.is_none());
    }

    #[test]
    fn empty_response_is_safe_with_no_findings() {
        let response = VerifyResponse::empty();
        assert!(response.is_safe);
        assert!(response.extracted_drugs.is_empty());
        assert!(response.interactions.is_empty());
        assert!(response.dosage_alerts.is_empty());
        assert!(response.alternatives.is_empty());
    }

    // ── RequestId ────────────────────────────────────────────────────────────

    #[test]
    fn request_id_new_produces_unique_values() {
        let ids: Vec<RequestId> = (0..100).map(|_| RequestId::new()).collect();

        // All 100 IDs should be distinct.
        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── MedSafeError display messages ────────────────────────────────────────

    #[test]
    fn error_ocr_display() {
        let err = MedSafeError::Ocr {
            reason: "engine timed out".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ocr extraction failed"));
        assert!(msg.contains("engine timed out"));
    }

    #[test]
    fn error_advice_display() {
        let err = MedSafeError::Advice {
            reason: "no generator configured".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("advice generation failed"));
        assert!(msg.contains("no generator configured"));
    }

    #[test]
    fn error_config_display() {
        let err = MedSafeError::Config {
            reason: "missing formulary path".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing formulary path"));
    }
}
