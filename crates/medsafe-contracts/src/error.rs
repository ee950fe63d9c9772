//! Error types for the MedSafe pipeline.
//!
//! The lookup tables themselves never fail — a miss silently produces no
//! findings. The only `Err` paths come from the external collaborators
//! (OCR, advice generation) and from startup configuration.

use thiserror::Error;

/// The unified error type for the MedSafe crates.
#[derive(Debug, Error)]
pub enum MedSafeError {
    /// The OCR engine could not extract text from the supplied image.
    ///
    /// A failed extraction is never partially applied — callers receive this
    /// error instead of a truncated or corrupted text result.
    #[error("ocr extraction failed: {reason}")]
    Ocr { reason: String },

    /// The free-text analysis collaborator failed or is not configured.
    #[error("advice generation failed: {reason}")]
    Advice { reason: String },

    /// A formulary document or extraction pattern could not be loaded.
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Convenience alias used throughout the MedSafe crates.
pub type MedSafeResult<T> = Result<T, MedSafeError>;
