//! The static substitute-drug table.
//!
//! Each drug maps to an ordered list of candidate substitutes (first listed
//! = preferred). Suggestions carry the reason of the alert that flagged the
//! drug, verbatim.

use std::collections::HashMap;

use tracing::warn;

use medsafe_contracts::{alert::AlternativeSuggestion, drug::Drug};
use medsafe_core::traits::AlternativeSource;

use crate::config::AlternativeEntry;

/// Uppercase the first character, leave the rest unchanged.
///
/// Not title-case: "co-codamol" becomes "Co-codamol", never "Co-Codamol".
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The immutable alternatives table.
#[derive(Debug, Clone, Default)]
pub struct AlternativeTable {
    substitutes: HashMap<String, Vec<String>>,
}

impl AlternativeTable {
    /// Build a table from configuration entries. Later duplicates win.
    pub fn from_entries(entries: &[AlternativeEntry]) -> Self {
        let mut substitutes = HashMap::with_capacity(entries.len());
        for entry in entries {
            if substitutes
                .insert(entry.drug.to_lowercase(), entry.substitutes.clone())
                .is_some()
            {
                warn!(drug = %entry.drug, "duplicate alternatives entry, later entry wins");
            }
        }
        Self { substitutes }
    }

    /// The registered substitute list for a drug, case-insensitively.
    pub fn lookup(&self, name: &str) -> Option<&[String]> {
        self.substitutes
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.substitutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substitutes.is_empty()
    }
}

impl AlternativeSource for AlternativeTable {
    /// Emit one suggestion per registered substitute, in registration order.
    ///
    /// The suggested name is capitalized (first letter only); the reason is
    /// "Alternative to {drug} due to {reason}" with the caller's original
    /// drug casing. A drug with no entry yields nothing — that is a normal
    /// outcome, not an error.
    fn find_alternatives(&self, drug: &Drug, reason: &str) -> Vec<AlternativeSuggestion> {
        let Some(substitutes) = self.substitutes.get(&drug.name.to_lowercase()) else {
            return Vec::new();
        };

        substitutes
            .iter()
            .map(|substitute| AlternativeSuggestion {
                original_drug: drug.name.clone(),
                suggested_drug: capitalize_first(substitute),
                reason: format!("Alternative to {} due to {}", drug.name, reason),
            })
            .collect()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
