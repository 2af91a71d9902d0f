//! CSV ingestion for the raw study extracts
//!
//! Loads the three upstream tables into their entity models. Column names
//! follow the source extracts; date columns accept both plain dates and
//! timestamps (see `utils::DATE_FORMATS`). Columns not listed here are
//! ignored.

use log::info;
use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::models::{Patient, PrescriptionInterval, RawEncounter};
use crate::utils::{parse_date_column, parse_opt_date_column};

// From patients.csv: Id, BIRTHDATE, DEATHDATE (blank means alive/unknown)
#[derive(Debug, Deserialize)]
struct PatientRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "BIRTHDATE")]
    birth_date: String,
    #[serde(rename = "DEATHDATE")]
    death_date: Option<String>,
}

// From encounters.csv: Id, PATIENT, START, STOP, REASONCODE (blank means uncoded)
#[derive(Debug, Deserialize)]
struct EncounterRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "PATIENT")]
    patient_id: String,
    #[serde(rename = "START")]
    start: String,
    #[serde(rename = "STOP")]
    stop: String,
    #[serde(rename = "REASONCODE")]
    reason_code: Option<u64>,
}

// From medications.csv: PATIENT, DESCRIPTION, START, STOP (blank means open-ended)
#[derive(Debug, Deserialize)]
struct MedicationRow {
    #[serde(rename = "PATIENT")]
    patient_id: String,
    #[serde(rename = "DESCRIPTION")]
    description: String,
    #[serde(rename = "START")]
    start: String,
    #[serde(rename = "STOP")]
    stop: Option<String>,
}

/// Load the patient extract
///
/// # Errors
/// Fails on unreadable files, malformed CSV, or unparseable date fields.
pub fn load_patients(path: &Path) -> Result<Vec<Patient>> {
    let mut patients = Vec::new();
    for record in csv::Reader::from_path(path)?.deserialize() {
        let row: PatientRow = record?;
        patients.push(Patient::new(
            row.id,
            parse_date_column(&row.birth_date, "BIRTHDATE")?,
            parse_opt_date_column(row.death_date.as_deref(), "DEATHDATE")?,
        ));
    }
    info!("loaded {} patients from {}", patients.len(), path.display());
    Ok(patients)
}

/// Load the encounter extract
///
/// # Errors
/// Fails on unreadable files, malformed CSV, or unparseable date fields.
pub fn load_encounters(path: &Path) -> Result<Vec<RawEncounter>> {
    let mut encounters = Vec::new();
    for record in csv::Reader::from_path(path)?.deserialize() {
        let row: EncounterRow = record?;
        encounters.push(RawEncounter::new(
            row.id,
            row.patient_id,
            parse_date_column(&row.start, "START")?,
            parse_date_column(&row.stop, "STOP")?,
            row.reason_code,
        ));
    }
    info!(
        "loaded {} encounters from {}",
        encounters.len(),
        path.display()
    );
    Ok(encounters)
}

/// Load the medication extract
///
/// # Errors
/// Fails on unreadable files, malformed CSV, or unparseable date fields.
pub fn load_prescriptions(path: &Path) -> Result<Vec<PrescriptionInterval>> {
    let mut prescriptions = Vec::new();
    for record in csv::Reader::from_path(path)?.deserialize() {
        let row: MedicationRow = record?;
        prescriptions.push(PrescriptionInterval::new(
            row.patient_id,
            row.description,
            parse_date_column(&row.start, "START")?,
            parse_opt_date_column(row.stop.as_deref(), "STOP")?,
        ));
    }
    info!(
        "loaded {} prescriptions from {}",
        prescriptions.len(),
        path.display()
    );
    Ok(prescriptions)
}
