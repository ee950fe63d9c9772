//! The MedSafe safety checker: the aggregation pipeline over the three
//! lookup sources.
//!
//! The checker enforces a fixed evaluation order:
//!
//!   Interactions (all pairs) → Dosage (per drug) → Alternatives (per alert)
//!
//! Alternatives are resolved for interaction alerts first, then dosage
//! alerts, preserving each list's emission order. Nothing is deduplicated at
//! any stage — downstream consumers depend on exact alert counts.

use tracing::{debug, info};

use medsafe_contracts::{
    alert::{AlternativeSuggestion, DosageAlert},
    drug::{Drug, Patient},
    report::SafetyReport,
};

use crate::traits::{AlternativeSource, DosageSource, InteractionSource};

/// The central checker that drives one verification over the lookup tables.
///
/// Owns the three sources as trait objects so hosting applications can swap
/// table implementations without touching the aggregation logic.
pub struct SafetyChecker {
    interactions: Box<dyn InteractionSource>,
    dosage: Box<dyn DosageSource>,
    alternatives: Box<dyn AlternativeSource>,
}

impl SafetyChecker {
    /// Create a checker over the given lookup sources.
    pub fn new(
        interactions: Box<dyn InteractionSource>,
        dosage: Box<dyn DosageSource>,
        alternatives: Box<dyn AlternativeSource>,
    ) -> Self {
        Self {
            interactions,
            dosage,
            alternatives,
        }
    }

    /// Run the full safety check for one drug list and patient.
    ///
    /// # Pipeline
    ///
    /// 1. Interaction lookup over every unordered pair of input drugs.
    /// 2. Dosage lookup per drug, flattened in drug order (source order
    ///    within a drug).
    /// 3. For every alert from steps 1–2 (interaction alerts first, then
    ///    dosage alerts), resolve the triggering drug by case-insensitive
    ///    exact name match against the input list — linear scan, first
    ///    occurrence wins, silent skip on a miss — and collect substitute
    ///    suggestions using the alert's description/issue as the reason.
    /// 4. `is_safe` is true iff both alert lists are empty. The alternatives
    ///    list never affects the verdict.
    pub fn verify(&self, drugs: &[Drug], patient: &Patient) -> SafetyReport {
        debug!(
            drug_count = drugs.len(),
            age = patient.age,
            "safety check starting"
        );

        // ── Step 1: pairwise interactions ────────────────────────────────────
        let interactions = self.interactions.find_interactions(drugs, patient.age);

        // ── Step 2: per-drug dosage findings ─────────────────────────────────
        let mut dosage_alerts: Vec<DosageAlert> = Vec::new();
        for drug in drugs {
            dosage_alerts.extend(self.dosage.find_dosage_alerts(drug, patient.age));
        }

        // ── Step 3: substitutes for every flagged drug ───────────────────────
        //
        // Interaction alerts resolve via drug_a, dosage alerts via drug.
        // The reason carried into each suggestion is the alert's own text.
        let flagged = interactions
            .iter()
            .map(|alert| (alert.drug_a.as_str(), alert.description.as_str()))
            .chain(
                dosage_alerts
                    .iter()
                    .map(|alert| (alert.drug.as_str(), alert.issue.as_str())),
            );

        let mut alternatives: Vec<AlternativeSuggestion> = Vec::new();
        for (name, reason) in flagged {
            let target = drugs
                .iter()
                .find(|drug| drug.name.to_lowercase() == name.to_lowercase());
            let Some(target) = target else {
                // An alert can name a drug not on the input list (e.g. a
                // fixed-cased contraindication entry); skip, never error.
                debug!(drug = name, "alert target not in input list, skipping");
                continue;
            };
            alternatives.extend(self.alternatives.find_alternatives(target, reason));
        }

        let is_safe = interactions.is_empty() && dosage_alerts.is_empty();

        info!(
            is_safe,
            interaction_count = interactions.len(),
            dosage_alert_count = dosage_alerts.len(),
            alternative_count = alternatives.len(),
            "safety check complete"
        );

        SafetyReport {
            is_safe,
            interactions,
            dosage_alerts,
            alternatives,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use medsafe_contracts::{
        alert::{AlternativeSuggestion, DosageAlert, InteractionAlert, Severity},
        drug::{Drug, Patient},
    };

    use crate::traits::{AlternativeSource, DosageSource, InteractionSource};

    use super::SafetyChecker;

    // ── Mock sources ─────────────────────────────────────────────────────────

    /// An interaction source that returns a fixed alert list.
    struct FixedInteractions {
        alerts: Vec<InteractionAlert>,
    }

    impl InteractionSource for FixedInteractions {
        fn find_interactions(&self, _drugs: &[Drug], _age: u32) -> Vec<InteractionAlert> {
            self.alerts.clone()
        }
    }

    /// A dosage source that flags one configured drug name.
    struct FixedDosage {
        flagged_drug: String,
        issue: String,
    }

    impl DosageSource for FixedDosage {
        fn find_dosage_alerts(&self, drug: &Drug, _age: u32) -> Vec<DosageAlert> {
            if drug.name.to_lowercase() == self.flagged_drug.to_lowercase() {
                vec![DosageAlert {
                    drug: drug.name.clone(),
                    issue: self.issue.clone(),
                    recommended_dosage: None,
                }]
            } else {
                vec![]
            }
        }
    }

    /// An alternative source that records the reason it was called with.
    struct EchoAlternatives;

    impl AlternativeSource for EchoAlternatives {
        fn find_alternatives(&self, drug: &Drug, reason: &str) -> Vec<AlternativeSuggestion> {
            vec![AlternativeSuggestion {
                original_drug: drug.name.clone(),
                suggested_drug: format!("alt-for-{}", drug.name.to_lowercase()),
                reason: reason.to_string(),
            }]
        }
    }

    /// An alternative source that never suggests anything.
    struct NoAlternatives;

    impl AlternativeSource for NoAlternatives {
        fn find_alternatives(&self, _drug: &Drug, _reason: &str) -> Vec<AlternativeSuggestion> {
            vec![]
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn interaction(a: &str, b: &str, description: &str) -> InteractionAlert {
        InteractionAlert {
            drug_a: a.to_string(),
            drug_b: b.to_string(),
            description: description.to_string(),
            severity: Severity::Medium,
        }
    }

    fn no_dosage() -> FixedDosage {
        FixedDosage {
            flagged_drug: String::new(),
            issue: String::new(),
        }
    }

    // ── Test cases ───────────────────────────────────────────────────────────

    #[test]
    fn safe_when_no_source_produces_alerts() {
        let checker = SafetyChecker::new(
            Box::new(FixedInteractions { alerts: vec![] }),
            Box::new(no_dosage()),
            Box::new(EchoAlternatives),
        );

        let drugs = vec![Drug::named("Amoxicillin")];
        let report = checker.verify(&drugs, &Patient::aged(30));

        assert!(report.is_safe);
        assert!(report.interactions.is_empty());
        assert!(report.dosage_alerts.is_empty());
        assert!(report.alternatives.is_empty());
    }

    /// A non-empty alternatives list must not make the prescription unsafe
    /// on its own — only interaction and dosage alerts decide the verdict.
    #[test]
    fn verdict_ignores_alternatives() {
        let checker = SafetyChecker::new(
            Box::new(FixedInteractions {
                alerts: vec![interaction("Warfarin", "Ibuprofen", "bleeding risk")],
            }),
            Box::new(no_dosage()),
            Box::new(EchoAlternatives),
        );

        let drugs = vec![Drug::named("Warfarin"), Drug::named("Ibuprofen")];
        let report = checker.verify(&drugs, &Patient::aged(50));

        assert!(!report.is_safe);
        assert_eq!(report.alternatives.len(), 1);

        // Same alerts with an empty alternatives source: still unsafe.
        let checker = SafetyChecker::new(
            Box::new(FixedInteractions {
                alerts: vec![interaction("Warfarin", "Ibuprofen", "bleeding risk")],
            }),
            Box::new(no_dosage()),
            Box::new(NoAlternatives),
        );
        let report = checker.verify(&drugs, &Patient::aged(50));
        assert!(!report.is_safe);
        assert!(report.alternatives.is_empty());
    }

    /// Alternatives for interaction alerts come before alternatives for
    /// dosage alerts, and the reason string is the triggering alert's text.
    #[test]
    fn alternatives_preserve_alert_order_and_reason() {
        let checker = SafetyChecker::new(
            Box::new(FixedInteractions {
                alerts: vec![interaction("Aspirin", "Ibuprofen", "gi bleeding")],
            }),
            Box::new(FixedDosage {
                flagged_drug: "Ibuprofen".to_string(),
                issue: "dose review".to_string(),
            }),
            Box::new(EchoAlternatives),
        );

        let drugs = vec![Drug::named("Aspirin"), Drug::named("Ibuprofen")];
        let report = checker.verify(&drugs, &Patient::aged(40));

        assert_eq!(report.alternatives.len(), 2);
        // Interaction alert resolved first, with its description as reason.
        assert_eq!(report.alternatives[0].original_drug, "Aspirin");
        assert_eq!(report.alternatives[0].reason, "gi bleeding");
        // Dosage alert second, with its issue as reason.
        assert_eq!(report.alternatives[1].original_drug, "Ibuprofen");
        assert_eq!(report.alternatives[1].reason, "dose review");
    }

    /// Resolution of the triggering drug is case-insensitive and takes the
    /// first occurrence in the input list.
    #[test]
    fn alert_target_resolution_is_case_insensitive_first_match() {
        let checker = SafetyChecker::new(
            Box::new(FixedInteractions {
                alerts: vec![interaction("ASPIRIN", "Ibuprofen", "gi bleeding")],
            }),
            Box::new(no_dosage()),
            Box::new(EchoAlternatives),
        );

        // Two casings of the same drug: the first one wins.
        let drugs = vec![
            Drug::named("aspirin"),
            Drug::named("Aspirin"),
            Drug::named("Ibuprofen"),
        ];
        let report = checker.verify(&drugs, &Patient::aged(40));

        assert_eq!(report.alternatives.len(), 1);
        assert_eq!(report.alternatives[0].original_drug, "aspirin");
    }

    /// An alert naming a drug absent from the input list is skipped without
    /// producing an error or a suggestion.
    #[test]
    fn unresolvable_alert_target_is_skipped() {
        let checker = SafetyChecker::new(
            Box::new(FixedInteractions {
                alerts: vec![interaction("Digoxin", "Clarithromycin", "toxicity")],
            }),
            Box::new(no_dosage()),
            Box::new(EchoAlternatives),
        );

        // Input list does not contain Digoxin.
        let drugs = vec![Drug::named("Metformin")];
        let report = checker.verify(&drugs, &Patient::aged(60));

        assert!(!report.is_safe);
        assert!(report.alternatives.is_empty());
    }

    #[test]
    fn empty_drug_list_is_safe() {
        let checker = SafetyChecker::new(
            Box::new(FixedInteractions { alerts: vec![] }),
            Box::new(no_dosage()),
            Box::new(EchoAlternatives),
        );

        let report = checker.verify(&[], &Patient::aged(25));
        assert!(report.is_safe);
    }
}
