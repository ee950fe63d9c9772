//! # medsafe-extract
//!
//! Drug-mention extraction from free prescription text.
//!
//! This crate provides [`RegexExtractor`], which implements the
//! [`medsafe_core::traits::TextExtractor`] trait. Extraction is
//! best-effort: a fixed lexicon substring scan followed by generic
//! prescription-shaped patterns, with adjacent dosage and frequency
//! recovery. Unrecognizable input yields an empty list, never an error.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medsafe_extract::RegexExtractor;
//!
//! let extractor = RegexExtractor::new()?;
//! let mentions = extractor.extract_drug_mentions("Take aspirin 500mg twice daily");
//! ```

pub mod extractor;
pub mod lexicon;

pub use extractor::RegexExtractor;
pub use lexicon::DRUG_LEXICON;
