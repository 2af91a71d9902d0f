//! Prescription interval entity

use chrono::NaiveDate;

use crate::error::{CohortError, Result};

/// A prescription row from the medication extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescriptionInterval {
    /// Identifier of the prescribed patient
    pub patient_id: String,
    /// Name of the prescribed drug(s), including formulation
    pub description: String,
    /// Prescription start date
    pub start: NaiveDate,
    /// Prescription stop date; absent means still open at extraction time
    pub stop: Option<NaiveDate>,
}

impl PrescriptionInterval {
    /// Create a new prescription interval
    #[must_use]
    pub const fn new(
        patient_id: String,
        description: String,
        start: NaiveDate,
        stop: Option<NaiveDate>,
    ) -> Self {
        Self {
            patient_id,
            description,
            start,
            stop,
        }
    }

    /// Reject intervals whose stop date precedes their start date
    pub fn validate(&self) -> Result<()> {
        match self.stop {
            Some(stop) if stop < self.start => Err(CohortError::MalformedInterval {
                patient_id: self.patient_id.clone(),
                start: self.start,
                stop,
            }),
            _ => Ok(()),
        }
    }

    /// Whether the prescription was active on the given date.
    ///
    /// Bounded intervals are open: a date equal to either boundary does
    /// not count. An open-ended prescription covers a fixed supply window
    /// of `open_window_days` from its start date.
    #[must_use]
    pub fn active_at(&self, date: &NaiveDate, open_window_days: i64) -> bool {
        match self.stop {
            Some(stop) => self.start < *date && *date < stop,
            None => {
                let elapsed = (*date - self.start).num_days();
                elapsed >= 0 && elapsed < open_window_days
            }
        }
    }

    /// Whether the description names any of the given opioid terms
    #[must_use]
    pub fn is_opioid(&self, opioid_terms: &[String]) -> bool {
        opioid_terms
            .iter()
            .any(|term| self.description.contains(term.as_str()))
    }
}
