//! Per-encounter clinical indicators for a drug-overdose hospital cohort.
//!
//! The library derives, for each qualifying overdose encounter: the
//! patient's age at the visit, a death indicator, the number of
//! concurrently active prescriptions, an opioid indicator, and 30/90-day
//! readmission indicators, from three raw extracts (patients, encounters,
//! medications).

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reader;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::CohortConfig;
pub use error::{CohortError, Result};
pub use models::{Patient, PatientIndex, PrescriptionInterval, QualifyingEncounter, RawEncounter};

// Derivation pipeline
pub use algorithm::{
    Cohort, CohortStats, annotate_medications, annotate_readmissions, derive_indicators,
    filter_encounters,
};

// Output assembly
pub use report::{IndicatorRow, OUTPUT_HEADER, to_output_rows, write_csv, write_csv_file};
