//! The static age-banded dosage table.
//!
//! Each drug maps to an adult and/or child recommendation string. The
//! patient's age selects exactly one band; the pediatric contraindication
//! overrides for aspirin and atorvastatin fire in addition to the band
//! recommendation, never instead of it, and only for drugs present in the
//! table.

use std::collections::HashMap;

use tracing::warn;

use medsafe_contracts::{alert::DosageAlert, drug::Drug};
use medsafe_core::traits::DosageSource;

use crate::config::DosageEntry;

/// Patients younger than this are in the child dosage band.
pub const ADULT_AGE_THRESHOLD: u32 = 18;

/// Issue text carried by every generic band recommendation alert.
const GENERIC_DOSAGE_ISSUE: &str = "Age-appropriate dosage recommendation";

/// Which dosage band applies to a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DosageCategory {
    Child,
    Adult,
}

impl DosageCategory {
    /// Select the band for an age: child iff age < 18.
    pub fn from_age(age: u32) -> Self {
        if age < ADULT_AGE_THRESHOLD {
            Self::Child
        } else {
            Self::Adult
        }
    }
}

/// The two recommendation bands stored for one drug.
#[derive(Debug, Clone)]
pub struct DosageRecommendation {
    adult: Option<String>,
    child: Option<String>,
}

impl DosageRecommendation {
    /// The recommendation text for one band, when recorded.
    pub fn for_category(&self, category: DosageCategory) -> Option<&str> {
        match category {
            DosageCategory::Adult => self.adult.as_deref(),
            DosageCategory::Child => self.child.as_deref(),
        }
    }
}

/// The immutable dosage table.
#[derive(Debug, Clone, Default)]
pub struct DosageTable {
    drugs: HashMap<String, DosageRecommendation>,
}

impl DosageTable {
    /// Build a table from configuration entries. Later duplicates win.
    pub fn from_entries(entries: &[DosageEntry]) -> Self {
        let mut drugs = HashMap::with_capacity(entries.len());
        for entry in entries {
            let recommendation = DosageRecommendation {
                adult: entry.adult.clone(),
                child: entry.child.clone(),
            };
            if drugs
                .insert(entry.drug.to_lowercase(), recommendation)
                .is_some()
            {
                warn!(drug = %entry.drug, "duplicate dosage entry, later entry wins");
            }
        }
        Self { drugs }
    }

    /// Look up the stored recommendation bands for a drug, case-insensitively.
    pub fn lookup(&self, name: &str) -> Option<&DosageRecommendation> {
        self.drugs.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }
}

impl DosageSource for DosageTable {
    /// Emit every dosage finding for one drug at the given age.
    ///
    /// For a drug in the table:
    /// 1. If the selected band has a recommendation, a generic alert is
    ///    emitted with the caller's drug name and the band text.
    /// 2. The pediatric overrides for aspirin (Reye's syndrome) and
    ///    atorvastatin fire additionally when age < 18. For both drugs the
    ///    child band already reads "not recommended", so pediatric callers
    ///    receive two alerts, the generic one and the specific one.
    ///    Consumers depend on the exact count; never collapse them.
    ///
    /// A drug absent from the table produces nothing, including no override.
    fn find_dosage_alerts(&self, drug: &Drug, age: u32) -> Vec<DosageAlert> {
        let mut alerts = Vec::new();

        let name = drug.name.to_lowercase();
        let Some(recommendation) = self.drugs.get(&name) else {
            return alerts;
        };

        let category = DosageCategory::from_age(age);
        if let Some(dosage) = recommendation.for_category(category) {
            alerts.push(DosageAlert {
                drug: drug.name.clone(),
                issue: GENERIC_DOSAGE_ISSUE.to_string(),
                recommended_dosage: Some(dosage.to_string()),
            });
        }

        if name == "aspirin" && age < ADULT_AGE_THRESHOLD {
            alerts.push(DosageAlert {
                drug: "Aspirin".to_string(),
                issue: "Contraindicated in patients under 18 due to risk of Reye's syndrome"
                    .to_string(),
                recommended_dosage: Some("Use acetaminophen instead".to_string()),
            });
        }

        if name == "atorvastatin" && age < ADULT_AGE_THRESHOLD {
            alerts.push(DosageAlert {
                drug: "Atorvastatin".to_string(),
                issue: "Not recommended for patients under 18 years old".to_string(),
                recommended_dosage: Some("Consult pediatric specialist".to_string()),
            });
        }

        alerts
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use medsafe_contracts::drug::Drug;
    use medsafe_core::traits::DosageSource;

    use crate::config::DosageEntry;

    use super::{DosageCategory, DosageTable};

    fn entry(drug: &str, adult: Option<&str>, child: Option<&str>) -> DosageEntry {
        DosageEntry {
            drug: drug.to_string(),
            adult: adult.map(str::to_string),
            child: child.map(str::to_string),
        }
    }

    fn sample_table() -> DosageTable {
        DosageTable::from_entries(&[
            entry(
                "aspirin",
                Some("75-325mg once daily"),
                Some("Contraindicated under 18 (Reye's syndrome)"),
            ),
            entry(
                "atorvastatin",
                Some("10-80mg once daily"),
                Some("Not recommended under 18"),
            ),
            entry(
                "ibuprofen",
                Some("200-400mg three times daily"),
                Some("5-10mg/kg every 6-8 hours"),
            ),
            // Adult-only entry: no child band recorded.
            entry("adult-only-drug", Some("1 tablet daily"), None),
        ])
    }

    #[test]
    fn category_threshold_is_eighteen() {
        assert_eq!(DosageCategory::from_age(0), DosageCategory::Child);
        assert_eq!(DosageCategory::from_age(17), DosageCategory::Child);
        assert_eq!(DosageCategory::from_age(18), DosageCategory::Adult);
        assert_eq!(DosageCategory::from_age(90), DosageCategory::Adult);
    }

    /// Adult aspirin: exactly one alert with the adult band text.
    #[test]
    fn aspirin_adult_single_generic_alert() {
        let table = sample_table();
        let alerts = table.find_dosage_alerts(&Drug::named("aspirin"), 30);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].issue, "Age-appropriate dosage recommendation");
        assert_eq!(alerts[0].recommended_dosage.as_deref(), Some("75-325mg once daily"));
    }

    /// Pediatric aspirin: the generic child-band alert AND the specific
    /// Reye's-syndrome override, in that order — exactly two alerts.
    #[test]
    fn aspirin_child_emits_generic_and_override() {
        let table = sample_table();
        let alerts = table.find_dosage_alerts(&Drug::named("aspirin"), 10);

        assert_eq!(alerts.len(), 2);

        assert_eq!(alerts[0].issue, "Age-appropriate dosage recommendation");
        assert_eq!(
            alerts[0].recommended_dosage.as_deref(),
            Some("Contraindicated under 18 (Reye's syndrome)")
        );

        assert_eq!(alerts[1].drug, "Aspirin");
        assert_eq!(
            alerts[1].issue,
            "Contraindicated in patients under 18 due to risk of Reye's syndrome"
        );
        assert_eq!(
            alerts[1].recommended_dosage.as_deref(),
            Some("Use acetaminophen instead")
        );
    }

    /// Pediatric atorvastatin: generic "Not recommended under 18" plus the
    /// consult-specialist override.
    #[test]
    fn atorvastatin_child_emits_generic_and_override() {
        let table = sample_table();
        let alerts = table.find_dosage_alerts(&Drug::named("Atorvastatin"), 12);

        assert_eq!(alerts.len(), 2);
        assert_eq!(
            alerts[0].recommended_dosage.as_deref(),
            Some("Not recommended under 18")
        );
        assert_eq!(alerts[1].drug, "Atorvastatin");
        assert_eq!(
            alerts[1].recommended_dosage.as_deref(),
            Some("Consult pediatric specialist")
        );
    }

    /// The generic alert echoes the caller's casing; the override uses its
    /// fixed capitalized name.
    #[test]
    fn generic_alert_keeps_input_casing() {
        let table = sample_table();
        let alerts = table.find_dosage_alerts(&Drug::named("ASPIRIN"), 10);

        assert_eq!(alerts[0].drug, "ASPIRIN");
        assert_eq!(alerts[1].drug, "Aspirin");
    }

    #[test]
    fn missing_band_emits_no_generic_alert() {
        let table = sample_table();
        let alerts = table.find_dosage_alerts(&Drug::named("adult-only-drug"), 9);
        assert!(alerts.is_empty());
    }

    #[test]
    fn unknown_drug_emits_nothing() {
        let table = sample_table();
        assert!(table
            .find_dosage_alerts(&Drug::named("acetazolamide"), 10)
            .is_empty());
    }

    #[test]
    fn boundary_age_eighteen_is_adult() {
        let table = sample_table();
        let alerts = table.find_dosage_alerts(&Drug::named("aspirin"), 18);

        // Adult band, no pediatric override.
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].recommended_dosage.as_deref(), Some("75-325mg once daily"));
    }
}
