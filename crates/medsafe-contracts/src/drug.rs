//! Drug and patient identity types.
//!
//! These types flow through every stage of the verification pipeline.
//! Drug identity for matching purposes is always the lowercased name —
//! the original casing is preserved for display and alert output.

use serde::{Deserialize, Serialize};

/// A single drug named on a prescription.
///
/// `dosage` and `frequency` are free-text strings as written (or extracted)
/// from the prescription; they are carried through to the response but the
/// lookup tables key only on `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drug {
    /// The drug name as written. Matching is case-insensitive.
    pub name: String,
    /// Free-text dosage, e.g. "500 mg".
    #[serde(default)]
    pub dosage: Option<String>,
    /// Free-text frequency, e.g. "twice daily".
    #[serde(default)]
    pub frequency: Option<String>,
}

impl Drug {
    /// Construct a drug carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dosage: None,
            frequency: None,
        }
    }
}

/// One drug mention recovered from free text by a `TextExtractor`.
///
/// Same shape as [`Drug`], kept distinct so the extraction boundary is
/// visible in signatures: extractors produce mentions, the service promotes
/// them to drugs before checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugMention {
    /// Extracted drug name, capitalized by the extractor.
    pub name: String,
    /// Dosage string found near the name, if any.
    pub dosage: Option<String>,
    /// Frequency term found near the name, if any.
    pub frequency: Option<String>,
}

impl From<DrugMention> for Drug {
    fn from(mention: DrugMention) -> Self {
        Self {
            name: mention.name,
            dosage: mention.dosage,
            frequency: mention.frequency,
        }
    }
}

/// The patient a prescription is being checked for.
///
/// Only `age` participates in the core lookup logic (it selects the dosage
/// category). Weight, conditions, and allergies are carried for callers
/// that enrich the request but are not consulted by the built-in tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Age in whole years.
    pub age: u32,
    /// Body weight in kilograms, when known.
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Known conditions (free text).
    #[serde(default)]
    pub conditions: Vec<String>,
    /// Known allergies (free text).
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl Patient {
    /// Construct a patient carrying only an age.
    pub fn aged(age: u32) -> Self {
        Self {
            age,
            weight_kg: None,
            conditions: Vec::new(),
            allergies: Vec::new(),
        }
    }
}
