use std::path::Path;

use log::info;
use serde::Serialize;

use crate::models::*;
use crate::processing::{extract, OcrProvider};
use crate::utils::Result;
use crate::validation::FormatValidator;

/// Extraction plus the review check of one card.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedCard {
    pub result: ExtractionResult,
    pub validation: FormatValidationResult,
}

pub struct IdCardProcessor<P: OcrProvider> {
    ocr: P,
    rules: ReviewRules,
}

impl<P: OcrProvider> IdCardProcessor<P> {
    pub fn new(ocr: P) -> Self {
        IdCardProcessor {
            ocr,
            rules: ReviewRules::basic(),
        }
    }

    pub fn with_rules(mut self, rules: ReviewRules) -> Self {
        self.rules = rules;
        self
    }

    // Main entry point: OCR the source, then extract and validate
    pub fn process(&self, source: &Path) -> Result<ProcessedCard> {
        // Step 1: Get the text lines
        let lines = self.ocr.extract_lines(source)?;

        // Step 2: Extract and check the fields
        Ok(self.process_lines(&lines))
    }

    pub fn process_lines(&self, lines: &[String]) -> ProcessedCard {
        let result = extract(lines);
        let validation = FormatValidator::validate(&result, &self.rules);

        info!(
            "Card processed: {} field(s), {}",
            result.len(),
            if validation.is_valid { "VALID" } else { "INCOMPLETE" }
        );

        ProcessedCard { result, validation }
    }
}
