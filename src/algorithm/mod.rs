//! Indicator derivation algorithms
//!
//! This module contains the derivation passes of the pipeline: cohort
//! admission filtering, readmission detection, and medication activity
//! matching, plus the orchestration that runs them over the three raw
//! tables.

pub mod cohort;
pub mod medication;
pub mod readmission;

pub use cohort::{Cohort, CohortStats, filter_encounters};
pub use medication::annotate_medications;
pub use readmission::annotate_readmissions;

use crate::config::CohortConfig;
use crate::error::Result;
use crate::models::{PatientIndex, PrescriptionInterval, RawEncounter};
use crate::report::{self, IndicatorRow};

/// Derive the full indicator table from the three raw tables.
///
/// A pure function of its inputs: admission filtering, then the two
/// annotation passes (which touch disjoint fields and may run in either
/// order), then row assembly. No state survives the call.
///
/// # Errors
/// Propagates the integrity failures of the underlying passes
/// (`UnknownPatient`, `MalformedInterval`).
pub fn derive_indicators(
    encounters: &[RawEncounter],
    patients: &PatientIndex,
    prescriptions: &[PrescriptionInterval],
    config: &CohortConfig,
) -> Result<(Vec<IndicatorRow>, CohortStats)> {
    let mut cohort = filter_encounters(encounters, patients, config)?;
    annotate_readmissions(&mut cohort.encounters, config);
    annotate_medications(&mut cohort.encounters, prescriptions, patients, config)?;
    let rows = report::to_output_rows(&cohort.encounters);
    Ok((rows, cohort.stats))
}
