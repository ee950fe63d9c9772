//! # medsafe-formulary
//!
//! The static lookup tables for the MedSafe prescription checker:
//! interaction pairs, age-banded dosage recommendations, and substitute
//! lists.
//!
//! Tables are declared in TOML, parsed once at startup, and immutable
//! afterwards — there is no runtime mutation path, so a single `Formulary`
//! serves concurrent requests without coordination.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medsafe_formulary::Formulary;
//!
//! let formulary = Formulary::builtin()?;
//! let checker = SafetyChecker::new(
//!     Box::new(formulary.interactions),
//!     Box::new(formulary.dosage),
//!     Box::new(formulary.alternatives),
//! );
//! ```

pub mod alternatives;
pub mod config;
pub mod dosage;
pub mod interactions;

use std::path::Path;

use tracing::info;

use medsafe_contracts::error::{MedSafeError, MedSafeResult};

pub use alternatives::AlternativeTable;
pub use config::{AlternativeEntry, DosageEntry, FormularyConfig, InteractionEntry};
pub use dosage::{DosageCategory, DosageTable, ADULT_AGE_THRESHOLD};
pub use interactions::{classify_severity, InteractionRecord, InteractionTable};

/// The built-in formulary document shipped with the crate.
const DEFAULT_FORMULARY: &str = include_str!("../formulary/default.toml");

/// The three loaded lookup tables.
#[derive(Debug, Clone)]
pub struct Formulary {
    pub interactions: InteractionTable,
    pub dosage: DosageTable,
    pub alternatives: AlternativeTable,
}

impl Formulary {
    /// Build all three tables from a parsed configuration.
    pub fn from_config(config: &FormularyConfig) -> Self {
        let formulary = Self {
            interactions: InteractionTable::from_entries(&config.interactions),
            dosage: DosageTable::from_entries(&config.dosages),
            alternatives: AlternativeTable::from_entries(&config.alternatives),
        };
        info!(
            interaction_pairs = formulary.interactions.len(),
            dosage_drugs = formulary.dosage.len(),
            alternative_drugs = formulary.alternatives.len(),
            "formulary loaded"
        );
        formulary
    }

    /// Parse `s` as TOML and build a formulary.
    ///
    /// Returns `MedSafeError::Config` if the TOML is malformed or does not
    /// match the expected `FormularyConfig` schema.
    pub fn from_toml_str(s: &str) -> MedSafeResult<Self> {
        let config: FormularyConfig = toml::from_str(s).map_err(|e| MedSafeError::Config {
            reason: format!("failed to parse formulary TOML: {}", e),
        })?;
        Ok(Self::from_config(&config))
    }

    /// Read the file at `path` and parse it as a TOML formulary.
    pub fn from_file(path: &Path) -> MedSafeResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedSafeError::Config {
            reason: format!("failed to read formulary file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load the formulary document shipped with the crate.
    pub fn builtin() -> MedSafeResult<Self> {
        Self::from_toml_str(DEFAULT_FORMULARY)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
