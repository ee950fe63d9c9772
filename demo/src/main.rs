//! MedSafe Prescription Checker — Demo CLI
//!
//! Wires the built-in formulary, the regex extractor, and the OCR text
//! cleanup into the real verification service and prints JSON results.
//!
//! Usage:
//!   cargo run -p demo -- verify --age 10 --drug aspirin --drug ibuprofen
//!   cargo run -p demo -- verify --age 30 --text "Take aspirin 500mg twice daily"
//!   cargo run -p demo -- extract --text "Rx: Amoxicillin 250mg tid"
//!   cargo run -p demo -- clean-text --file scan-output.txt

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medsafe_contracts::{
    drug::{Drug, Patient},
    error::{MedSafeError, MedSafeResult},
    report::VerifyRequest,
};
use medsafe_core::{traits::TextExtractor, SafetyChecker, VerificationService};
use medsafe_extract::RegexExtractor;
use medsafe_formulary::Formulary;
use medsafe_ocr::TextCleaner;

// ── CLI definition ────────────────────────────────────────────────────────────

/// MedSafe — prescription safety checker demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "MedSafe prescription checker demo",
    long_about = "Checks drug lists against the built-in interaction, dosage, and\n\
                  alternative tables, extracts drug mentions from free text, and\n\
                  cleans up OCR output."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify a prescription for a patient.
    Verify {
        /// Patient age in years.
        #[arg(long)]
        age: u32,
        /// Drug name; repeat for multiple drugs.
        #[arg(long = "drug")]
        drugs: Vec<String>,
        /// Free prescription text to extract further drugs from.
        #[arg(long)]
        text: Option<String>,
    },
    /// Extract drug mentions from free prescription text.
    Extract {
        /// The text to scan.
        #[arg(long)]
        text: String,
    },
    /// Run the OCR cleanup over a recognized-text file.
    CleanText {
        /// Path to a file holding raw OCR output.
        #[arg(long)]
        file: PathBuf,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Verify { age, drugs, text } => run_verify(age, drugs, text),
        Command::Extract { text } => run_extract(&text),
        Command::CleanText { file } => run_clean_text(&file),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn build_service() -> MedSafeResult<VerificationService> {
    let formulary = Formulary::builtin()?;
    let checker = SafetyChecker::new(
        Box::new(formulary.interactions),
        Box::new(formulary.dosage),
        Box::new(formulary.alternatives),
    );
    Ok(VerificationService::new(
        checker,
        Box::new(RegexExtractor::new()?),
    ))
}

fn run_verify(age: u32, drugs: Vec<String>, text: Option<String>) -> MedSafeResult<()> {
    let service = build_service()?;

    let request = VerifyRequest {
        patient: Patient::aged(age),
        drugs: drugs.into_iter().map(Drug::named).collect(),
        text_input: text,
    };
    let response = service.verify(&request);

    println!("{}", render_json(&response)?);
    Ok(())
}

fn run_extract(text: &str) -> MedSafeResult<()> {
    let extractor = RegexExtractor::new()?;
    let mentions = extractor.extract_drug_mentions(text);

    println!("{}", render_json(&mentions)?);
    Ok(())
}

fn run_clean_text(file: &std::path::Path) -> MedSafeResult<()> {
    let raw = std::fs::read_to_string(file).map_err(|e| MedSafeError::Config {
        reason: format!("failed to read text file '{}': {}", file.display(), e),
    })?;

    let cleaner = TextCleaner::new()?;
    let cleaned = cleaner.snap_to_lexicon(&cleaner.clean(&raw));

    println!("{}", cleaned);
    Ok(())
}

fn render_json<T: serde::Serialize>(value: &T) -> MedSafeResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| MedSafeError::Config {
        reason: format!("failed to render output: {}", e),
    })
}
