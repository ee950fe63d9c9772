//! The fixed drug-name lexicon used by the substring extraction pass.
//!
//! All entries are lowercase single words. The list covers the common
//! outpatient drugs the checker's tables know about plus the usual
//! prescription suspects, so plain-language prescriptions extract without
//! needing the pattern pass at all.

/// Common drug names matched as lowercase substrings of the input text.
pub const DRUG_LEXICON: [&str; 40] = [
    "aspirin",
    "ibuprofen",
    "acetaminophen",
    "paracetamol",
    "metformin",
    "lisinopril",
    "atorvastatin",
    "metoprolol",
    "omeprazole",
    "simvastatin",
    "losartan",
    "amlodipine",
    "hydrochlorothiazide",
    "prednisone",
    "tramadol",
    "gabapentin",
    "furosemide",
    "warfarin",
    "clopidogrel",
    "pantoprazole",
    "sertraline",
    "fluoxetine",
    "citalopram",
    "venlafaxine",
    "duloxetine",
    "albuterol",
    "montelukast",
    "fluticasone",
    "loratadine",
    "diphenhydramine",
    "amoxicillin",
    "azithromycin",
    "clarithromycin",
    "doxycycline",
    "cephalexin",
    "ciprofloxacin",
    "levofloxacin",
    "penicillin",
    "erythromycin",
    "tetracycline",
];
