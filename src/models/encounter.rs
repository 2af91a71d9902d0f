//! Encounter entities
//!
//! `RawEncounter` is an input row from the encounter extract.
//! `QualifyingEncounter` is the derived per-encounter indicator record:
//! created by the cohort filter with indicator fields at their
//! zero/false defaults, then filled in by the readmission and medication
//! passes, which touch disjoint fields and may run in either order.

use chrono::NaiveDate;

/// A row from the raw encounter extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEncounter {
    /// Unique encounter identifier
    pub id: String,
    /// Identifier of the affected patient
    pub patient_id: String,
    /// Encounter start date
    pub start: NaiveDate,
    /// Encounter stop date
    pub stop: NaiveDate,
    /// Coded encounter reason, when one was recorded
    pub reason_code: Option<u64>,
}

impl RawEncounter {
    /// Create a new raw encounter row
    #[must_use]
    pub const fn new(
        id: String,
        patient_id: String,
        start: NaiveDate,
        stop: NaiveDate,
        reason_code: Option<u64>,
    ) -> Self {
        Self {
            id,
            patient_id,
            start,
            stop,
            reason_code,
        }
    }
}

/// Per-encounter indicator record for an admitted overdose encounter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifyingEncounter {
    /// Encounter identifier
    pub encounter_id: String,
    /// Identifier of the affected patient
    pub patient_id: String,
    /// Encounter start date
    pub start: NaiveDate,
    /// Encounter stop date
    pub stop: NaiveDate,
    /// Patient age in whole years at the stop date
    pub age_at_visit: i32,
    /// Whether the patient died during or by this encounter
    pub death_at_visit: bool,
    /// Number of prescriptions active at the start date
    pub active_medication_count: u32,
    /// Whether any active prescription is an opioid
    pub opioid_active: bool,
    /// Readmitted for overdose within the long (90-day) window
    pub readmitted_within_90: bool,
    /// Readmitted for overdose within the short (30-day) window
    pub readmitted_within_30: bool,
    /// Start date of the first readmission inside the long window
    pub first_readmission_date: Option<NaiveDate>,
}

impl QualifyingEncounter {
    /// Create a record for an admitted encounter, indicators defaulted
    #[must_use]
    pub const fn new(
        encounter_id: String,
        patient_id: String,
        start: NaiveDate,
        stop: NaiveDate,
        age_at_visit: i32,
        death_at_visit: bool,
    ) -> Self {
        Self {
            encounter_id,
            patient_id,
            start,
            stop,
            age_at_visit,
            death_at_visit,
            active_medication_count: 0,
            opioid_active: false,
            readmitted_within_90: false,
            readmitted_within_30: false,
            first_readmission_date: None,
        }
    }
}
