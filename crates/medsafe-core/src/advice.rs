//! Prompt construction for the free-text analysis collaborator.
//!
//! Every `AdviceGenerator` implementation receives the same instruction
//! block, so analyses are comparable across backing models.

/// Build the analysis prompt for one prescription and patient age.
pub fn advice_prompt(prescription_text: &str, patient_age: u32) -> String {
    format!(
        "As a medical AI assistant, analyze this prescription for a {patient_age}-year-old patient:\n\
         \n\
         Prescription: {prescription_text}\n\
         \n\
         Please provide:\n\
         1. Potential drug interactions to watch for\n\
         2. Age-appropriate dosage considerations\n\
         3. Alternative medication suggestions if needed\n\
         4. Safety recommendations\n\
         \n\
         Analysis:"
    )
}
