//! Indicator row assembly and CSV emission
//!
//! The only place where typed values become output text: indicator
//! booleans render as 0/1 and the absent first readmission date as the
//! literal sentinel. Everything upstream of this module works on typed
//! fields.

use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::QualifyingEncounter;

/// Column order of the output table
pub const OUTPUT_HEADER: [&str; 10] = [
    "PATIENT_ID",
    "ENCOUNTER_ID",
    "HOSPITAL_ENCOUNTER_DATE",
    "AGE_AT_VISIT",
    "DEATH_AT_VISIT_IND",
    "COUNT_CURRENT_MEDS",
    "CURRENT_OPIOID_IND",
    "READMISSION_90_DAY_IND",
    "READMISSION_30_DAY_IND",
    "FIRST_READMISSION_DATE",
];

/// Sentinel rendered for absent optional fields
pub const NOT_APPLICABLE: &str = "NA";

/// One assembled output row, still fully typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorRow {
    /// Patient identifier
    pub patient_id: String,
    /// Encounter identifier
    pub encounter_id: String,
    /// Encounter start date
    pub encounter_date: NaiveDate,
    /// Patient age in whole years at the visit
    pub age_at_visit: i32,
    /// Death indicator
    pub death_at_visit: bool,
    /// Number of prescriptions active at the visit
    pub current_medication_count: u32,
    /// Opioid indicator
    pub opioid_active: bool,
    /// Long-window readmission indicator
    pub readmitted_within_90: bool,
    /// Short-window readmission indicator
    pub readmitted_within_30: bool,
    /// First readmission date inside the long window
    pub first_readmission_date: Option<NaiveDate>,
}

impl From<&QualifyingEncounter> for IndicatorRow {
    fn from(encounter: &QualifyingEncounter) -> Self {
        Self {
            patient_id: encounter.patient_id.clone(),
            encounter_id: encounter.encounter_id.clone(),
            encounter_date: encounter.start,
            age_at_visit: encounter.age_at_visit,
            death_at_visit: encounter.death_at_visit,
            current_medication_count: encounter.active_medication_count,
            opioid_active: encounter.opioid_active,
            readmitted_within_90: encounter.readmitted_within_90,
            readmitted_within_30: encounter.readmitted_within_30,
            first_readmission_date: encounter.first_readmission_date,
        }
    }
}

/// Assemble output rows, one per qualifying encounter, in input order
#[must_use]
pub fn to_output_rows(encounters: &[QualifyingEncounter]) -> Vec<IndicatorRow> {
    encounters.iter().map(IndicatorRow::from).collect()
}

fn flag(value: bool) -> String {
    u8::from(value).to_string()
}

/// Write the output table to any writer
///
/// # Errors
/// Fails when the underlying writer fails.
pub fn write_csv<W: Write>(rows: &[IndicatorRow], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(OUTPUT_HEADER)?;
    for row in rows {
        out.write_record([
            row.patient_id.clone(),
            row.encounter_id.clone(),
            row.encounter_date.to_string(),
            row.age_at_visit.to_string(),
            flag(row.death_at_visit),
            row.current_medication_count.to_string(),
            flag(row.opioid_active),
            flag(row.readmitted_within_90),
            flag(row.readmitted_within_30),
            row.first_readmission_date
                .map_or_else(|| NOT_APPLICABLE.to_string(), |date| date.to_string()),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Write the output table to a file
///
/// # Errors
/// Fails when the file cannot be created or written.
pub fn write_csv_file(rows: &[IndicatorRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(rows, std::io::BufWriter::new(file))
}
