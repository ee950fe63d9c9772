//! Free-text analysis output types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The result of running a prescription through an `AdviceGenerator`.
///
/// The analysis text is produced by an external model and is advisory only —
/// it never feeds back into the deterministic table lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceReport {
    /// Identifier of the model that produced the analysis.
    pub model: String,
    /// The generated analysis text.
    pub analysis: String,
    /// When the analysis was generated (UTC).
    pub generated_at: DateTime<Utc>,
}
