//! # medsafe-ocr
//!
//! The image-to-text path of the MedSafe checker.
//!
//! The OCR engine itself is a black box behind
//! [`medsafe_core::traits::OcrEngine`] — this crate owns what surrounds it:
//! [`TextCleaner`] fixes the predictable noise in recognized prescription
//! text (dosage spacing, abbreviation casing, misread drug names), and
//! [`OcrPipeline`] composes an engine with the cleanup.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medsafe_ocr::OcrPipeline;
//!
//! let pipeline = OcrPipeline::new(Box::new(my_engine))?;
//! let text = pipeline.extract_text(&image_bytes)?;
//! ```

pub mod cleaner;
pub mod pipeline;

pub use cleaner::TextCleaner;
pub use pipeline::OcrPipeline;
