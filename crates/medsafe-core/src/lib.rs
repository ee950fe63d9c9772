//! # medsafe-core
//!
//! The aggregation pipeline and trait seams for the MedSafe prescription
//! checker.
//!
//! This crate provides:
//! - The lookup-source traits (`InteractionSource`, `DosageSource`,
//!   `AlternativeSource`) implemented by the formulary tables
//! - The external-collaborator traits (`TextExtractor`, `OcrEngine`,
//!   `AdviceGenerator`)
//! - The `SafetyChecker` that drives the sources in the correct order
//! - The `VerificationService` envelope layer above the checker
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medsafe_core::{SafetyChecker, VerificationService};
//!
//! let checker = SafetyChecker::new(interactions, dosage, alternatives);
//! let service = VerificationService::new(checker, extractor);
//! let response = service.verify(&request);
//! ```

pub mod advice;
pub mod checker;
pub mod service;
pub mod traits;

pub use checker::SafetyChecker;
pub use service::VerificationService;
