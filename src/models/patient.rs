//! Patient entity and index
//!
//! The patient table is loaded once into a `PatientIndex`; every other
//! table references patients by identifier through it.

use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;

use crate::error::{CohortError, Result};

/// A patient from the raw extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    /// Unique patient identifier
    pub id: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Date of death, when the patient died before extraction
    pub death_date: Option<NaiveDate>,
}

impl Patient {
    /// Create a new patient
    #[must_use]
    pub const fn new(id: String, birth_date: NaiveDate, death_date: Option<NaiveDate>) -> Self {
        Self {
            id,
            birth_date,
            death_date,
        }
    }

    /// Age in whole years at a reference date.
    ///
    /// Calendar-aware: the year difference is reduced by one when the
    /// birthday has not yet occurred in the reference year.
    #[must_use]
    pub fn age_at(&self, reference_date: &NaiveDate) -> i32 {
        let years = reference_date.year() - self.birth_date.year();
        // Adjust for birthday not yet reached in the reference year
        if reference_date.month() < self.birth_date.month()
            || (reference_date.month() == self.birth_date.month()
                && reference_date.day() < self.birth_date.day())
        {
            years - 1
        } else {
            years
        }
    }

    /// Whether the patient had died on or before the given date
    #[must_use]
    pub fn deceased_by(&self, date: &NaiveDate) -> bool {
        self.death_date.is_some_and(|death| death <= *date)
    }
}

/// Lookup table from patient identifier to patient
#[derive(Debug, Default)]
pub struct PatientIndex {
    patients: FxHashMap<String, Patient>,
}

impl PatientIndex {
    /// Build the index from loaded patient rows
    #[must_use]
    pub fn from_patients(patients: impl IntoIterator<Item = Patient>) -> Self {
        Self {
            patients: patients
                .into_iter()
                .map(|patient| (patient.id.clone(), patient))
                .collect(),
        }
    }

    /// Look up a patient by identifier
    #[must_use]
    pub fn get(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.get(patient_id)
    }

    /// Look up a patient that the referencing table guarantees to exist.
    ///
    /// A miss is a data integrity violation and is reported with the name
    /// of the referencing table.
    pub fn require(&self, patient_id: &str, referenced_by: &'static str) -> Result<&Patient> {
        self.get(patient_id)
            .ok_or_else(|| CohortError::UnknownPatient {
                patient_id: patient_id.to_string(),
                context: referenced_by,
            })
    }

    /// Number of patients in the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
