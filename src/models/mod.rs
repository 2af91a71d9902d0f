//! Domain models for the overdose cohort study
//!
//! This module contains the entity models used throughout the pipeline:
//! the raw input rows and the derived per-encounter indicator record.

// Re-export entity models
pub mod encounter;
pub mod medication;
pub mod patient;

// Re-export commonly used types
pub use encounter::{QualifyingEncounter, RawEncounter};
pub use medication::PrescriptionInterval;
pub use patient::{Patient, PatientIndex};
