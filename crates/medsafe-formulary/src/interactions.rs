//! The static drug-pair interaction table.
//!
//! Storage is a single map keyed by the normalized pair — both names
//! lowercased, then ordered lexicographically — so the symmetric lookup
//! ("a with b" and "b with a" resolve to the same record) is one probe.
//! Each record retains the registration order of its two names, which
//! alerts echo regardless of input order.

use std::collections::HashMap;

use tracing::warn;

use medsafe_contracts::{
    alert::{InteractionAlert, Severity},
    drug::Drug,
};
use medsafe_core::traits::InteractionSource;

use crate::config::InteractionEntry;

/// Description keywords that escalate an interaction to high severity.
const HIGH_SEVERITY_KEYWORDS: [&str; 4] = ["bleeding", "damage", "serious", "toxicity"];

/// Derive the severity of an interaction from its description text.
///
/// High iff the description contains any of the keyword set, matched
/// case-insensitively as a substring; medium otherwise. No built-in
/// description maps to low.
pub fn classify_severity(description: &str) -> Severity {
    let lower = description.to_lowercase();
    if HIGH_SEVERITY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Severity::High
    } else {
        Severity::Medium
    }
}

/// One stored interaction, names lowercased, in registration order.
#[derive(Debug, Clone)]
pub struct InteractionRecord {
    /// First-registered name, lowercased.
    pub first: String,
    /// Second-registered name, lowercased.
    pub second: String,
    pub description: String,
}

/// The normalized map key for an unordered pair of lowercased names.
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// The immutable interaction table.
#[derive(Debug, Clone, Default)]
pub struct InteractionTable {
    pairs: HashMap<(String, String), InteractionRecord>,
}

impl InteractionTable {
    /// Build a table from configuration entries.
    ///
    /// A pair registered twice (in either orientation) keeps the later
    /// entry; the collision is logged.
    pub fn from_entries(entries: &[InteractionEntry]) -> Self {
        let mut pairs = HashMap::with_capacity(entries.len());
        for entry in entries {
            let first = entry.first.to_lowercase();
            let second = entry.second.to_lowercase();
            let record = InteractionRecord {
                first: first.clone(),
                second: second.clone(),
                description: entry.description.clone(),
            };
            if pairs.insert(pair_key(&first, &second), record).is_some() {
                warn!(
                    first = %entry.first,
                    second = %entry.second,
                    "duplicate interaction pair, later entry wins"
                );
            }
        }
        Self { pairs }
    }

    /// Look up the record for an unordered pair of names, case-insensitively.
    pub fn lookup(&self, a: &str, b: &str) -> Option<&InteractionRecord> {
        self.pairs
            .get(&pair_key(&a.to_lowercase(), &b.to_lowercase()))
    }

    /// Number of registered pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl InteractionSource for InteractionTable {
    /// Check every unordered index pair (i < j) of the input list.
    ///
    /// On a hit the alert carries the original-cased input names arranged
    /// in the record's registration order, the stored description, and the
    /// keyword-derived severity. Duplicate input names are compared per
    /// index pair and yield duplicate alerts; callers must not expect
    /// deduplication.
    fn find_interactions(&self, drugs: &[Drug], _age: u32) -> Vec<InteractionAlert> {
        let mut alerts = Vec::new();

        for i in 0..drugs.len() {
            for j in (i + 1)..drugs.len() {
                let Some(record) = self.lookup(&drugs[i].name, &drugs[j].name) else {
                    continue;
                };

                // Echo input names in registration order.
                let (a, b) = if drugs[i].name.to_lowercase() == record.first {
                    (&drugs[i], &drugs[j])
                } else {
                    (&drugs[j], &drugs[i])
                };

                alerts.push(InteractionAlert {
                    drug_a: a.name.clone(),
                    drug_b: b.name.clone(),
                    description: record.description.clone(),
                    severity: classify_severity(&record.description),
                });
            }
        }

        alerts
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
