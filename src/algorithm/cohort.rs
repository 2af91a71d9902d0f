//! Cohort admission filtering
//!
//! Selects the encounters that enter the study cohort: overdose-coded,
//! starting after the cohort start date, with the patient inside the
//! study age band at the encounter stop date. Computes the age and death
//! indicator for each admitted encounter.

use log::info;
use std::fmt;

use crate::config::CohortConfig;
use crate::error::Result;
use crate::models::{PatientIndex, QualifyingEncounter, RawEncounter};
use crate::utils::progress;

/// Aggregate admission counts for one filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CohortStats {
    /// Encounters admitted into the cohort
    pub admitted: usize,
    /// Encounters rejected by an admission test
    pub rejected: usize,
}

impl CohortStats {
    /// Total encounters checked
    #[must_use]
    pub const fn total(&self) -> usize {
        self.admitted + self.rejected
    }
}

impl fmt::Display for CohortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} admitted, {} rejected of {} encounters",
            self.admitted,
            self.rejected,
            self.total()
        )
    }
}

/// An admitted cohort with its aggregate counts
#[derive(Debug, Default)]
pub struct Cohort {
    /// One record per admitted encounter, in input order
    pub encounters: Vec<QualifyingEncounter>,
    /// Admission counts
    pub stats: CohortStats,
}

/// Filter raw encounters into the qualifying cohort.
///
/// Admission tests, applied in order: the reason code equals the
/// configured overdose code, the start date lies strictly after the
/// cohort start date, and the patient's age at the encounter stop date
/// lies strictly inside the configured band. Rejected encounters are only
/// counted, never reported individually.
///
/// # Errors
/// Returns `UnknownPatient` when an otherwise qualifying encounter
/// references a patient id missing from the index.
pub fn filter_encounters(
    raw_encounters: &[RawEncounter],
    patients: &PatientIndex,
    config: &CohortConfig,
) -> Result<Cohort> {
    let pb = progress::create_scan_progress_bar(raw_encounters.len() as u64, "Scanning encounters");
    let mut cohort = Cohort::default();

    for encounter in raw_encounters {
        pb.inc(1);

        if encounter.reason_code != Some(config.overdose_reason_code)
            || encounter.start <= config.cohort_start_date
        {
            cohort.stats.rejected += 1;
            continue;
        }

        let patient = patients.require(&encounter.patient_id, "encounter")?;
        let age = patient.age_at(&encounter.stop);
        if age <= config.min_age || age >= config.max_age {
            cohort.stats.rejected += 1;
            continue;
        }

        cohort.encounters.push(QualifyingEncounter::new(
            encounter.id.clone(),
            encounter.patient_id.clone(),
            encounter.start,
            encounter.stop,
            age,
            patient.deceased_by(&encounter.stop),
        ));
        cohort.stats.admitted += 1;
    }
    pb.finish_and_clear();

    info!("{}", cohort.stats);
    Ok(cohort)
}
