//! The OCR extraction pipeline.
//!
//! Wires a pluggable `OcrEngine` (Tesseract wrapper, vision model, remote
//! service) to the medical text cleanup. Engine faults propagate unchanged —
//! a failed extraction is surfaced to the caller, never partially applied.

use tracing::{debug, info};

use medsafe_contracts::error::MedSafeResult;
use medsafe_core::traits::OcrEngine;

use crate::cleaner::TextCleaner;

/// Engine + cleanup, exposed as one text-extraction service.
pub struct OcrPipeline {
    engine: Box<dyn OcrEngine>,
    cleaner: TextCleaner,
}

impl OcrPipeline {
    /// Build a pipeline over the given engine.
    pub fn new(engine: Box<dyn OcrEngine>) -> MedSafeResult<Self> {
        Ok(Self {
            engine,
            cleaner: TextCleaner::new()?,
        })
    }

    /// Extract and clean up the text on a prescription image.
    ///
    /// An engine fault is returned as-is (`MedSafeError::Ocr` by contract).
    /// An empty recognition result is a valid outcome and skips cleanup.
    pub fn extract_text(&self, image: &[u8]) -> MedSafeResult<String> {
        let raw = self.engine.extract_text(image)?;

        if raw.trim().is_empty() {
            debug!("ocr engine recognized no text");
            return Ok(String::new());
        }

        let cleaned = self.cleaner.clean(&raw);
        let snapped = self.cleaner.snap_to_lexicon(&cleaned);

        info!(
            raw_len = raw.len(),
            cleaned_len = snapped.len(),
            "ocr text extracted and cleaned"
        );
        Ok(snapped)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use medsafe_contracts::error::{MedSafeError, MedSafeResult};
    use medsafe_core::traits::OcrEngine;

    use super::OcrPipeline;

    /// An engine returning a fixed recognition result.
    struct FixedEngine {
        text: String,
    }

    impl OcrEngine for FixedEngine {
        fn extract_text(&self, _image: &[u8]) -> MedSafeResult<String> {
            Ok(self.text.clone())
        }
    }

    /// An engine that always fails.
    struct FailingEngine;

    impl OcrEngine for FailingEngine {
        fn extract_text(&self, _image: &[u8]) -> MedSafeResult<String> {
            Err(MedSafeError::Ocr {
                reason: "engine crashed".to_string(),
            })
        }
    }

    #[test]
    fn recognized_text_is_cleaned_and_snapped() {
        let pipeline = OcrPipeline::new(Box::new(FixedEngine {
            text: "amoxicilin 500mg po tid".to_string(),
        }))
        .unwrap();

        let text = pipeline.extract_text(b"fake image").unwrap();
        assert_eq!(text, "amoxicillin 500 mg PO TID");
    }

    #[test]
    fn empty_recognition_is_ok_and_empty() {
        let pipeline = OcrPipeline::new(Box::new(FixedEngine {
            text: "   ".to_string(),
        }))
        .unwrap();

        let text = pipeline.extract_text(b"fake image").unwrap();
        assert_eq!(text, "");
    }

    /// Engine failure surfaces to the caller as the OCR error, with no
    /// partial text.
    #[test]
    fn engine_failure_propagates() {
        let pipeline = OcrPipeline::new(Box::new(FailingEngine)).unwrap();

        let result = pipeline.extract_text(b"fake image");
        assert!(matches!(result, Err(MedSafeError::Ocr { .. })));
    }
}
