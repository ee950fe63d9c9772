//! Formulary configuration schema.
//!
//! A `FormularyConfig` is deserialized from TOML and holds the raw table
//! entries. Entry order is significant for substitute lists (first listed =
//! preferred) and is preserved by the loaded tables.

use serde::{Deserialize, Serialize};

/// One known adverse interaction between two drugs.
///
/// The pair is unordered: `first`/`second` only record how the entry was
/// written, and a lookup matches either orientation. Alerts echo the two
/// names in this registration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionEntry {
    pub first: String,
    pub second: String,
    /// Clinical description, copied verbatim into alerts. Severity is
    /// derived from this text at load time.
    pub description: String,
}

/// Age-banded dosage recommendations for one drug.
///
/// A missing band means no recommendation exists for that category and no
/// generic alert is emitted for patients in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DosageEntry {
    pub drug: String,
    pub adult: Option<String>,
    pub child: Option<String>,
}

/// Ordered substitute list for one drug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeEntry {
    pub drug: String,
    /// Candidate substitutes, preferred first.
    pub substitutes: Vec<String>,
}

/// The top-level structure deserialized from a TOML formulary file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormularyConfig {
    #[serde(default)]
    pub interactions: Vec<InteractionEntry>,
    #[serde(default)]
    pub dosages: Vec<DosageEntry>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeEntry>,
}
