//! Medication activity matching
//!
//! Joins each qualifying encounter against its patient's prescription
//! intervals, counting concurrently active prescriptions and flagging
//! active opioids.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::CohortConfig;
use crate::error::Result;
use crate::models::{PatientIndex, PrescriptionInterval, QualifyingEncounter};

/// Annotate each encounter with the active-medication count and opioid
/// indicator.
///
/// Every prescription row is checked against the patient index and its
/// interval validated; only prescriptions of patients with at least one
/// qualifying encounter enter the join. The opioid indicator is
/// monotone: once set for an encounter, further active prescriptions keep
/// incrementing the count without resetting it.
///
/// # Errors
/// Returns `UnknownPatient` for a prescription referencing a patient id
/// missing from the index, and `MalformedInterval` for a prescription
/// whose stop date precedes its start date.
pub fn annotate_medications(
    encounters: &mut [QualifyingEncounter],
    prescriptions: &[PrescriptionInterval],
    patients: &PatientIndex,
    config: &CohortConfig,
) -> Result<()> {
    let cohort_patients: FxHashSet<&str> = encounters
        .iter()
        .map(|encounter| encounter.patient_id.as_str())
        .collect();

    // Prescriptions grouped by patient, join bounded to cohort patients
    let mut by_patient: FxHashMap<&str, Vec<&PrescriptionInterval>> = FxHashMap::default();
    for prescription in prescriptions {
        patients.require(&prescription.patient_id, "prescription")?;
        prescription.validate()?;
        if cohort_patients.contains(prescription.patient_id.as_str()) {
            by_patient
                .entry(prescription.patient_id.as_str())
                .or_default()
                .push(prescription);
        }
    }
    debug!(
        "matching {} prescriptions across {} cohort patients",
        by_patient.values().map(Vec::len).sum::<usize>(),
        by_patient.len()
    );

    for encounter in encounters.iter_mut() {
        let Some(medications) = by_patient.get(encounter.patient_id.as_str()) else {
            continue;
        };
        for prescription in medications {
            if prescription.active_at(&encounter.start, config.open_prescription_window_days) {
                encounter.active_medication_count += 1;
                if prescription.is_opioid(&config.opioid_terms) {
                    encounter.opioid_active = true;
                }
            }
        }
    }
    Ok(())
}
