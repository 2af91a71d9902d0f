//! Cohort study configuration
//!
//! This module defines the study parameters for cohort derivation: which
//! encounters qualify, the readmission windows, and the medication
//! matching policies.

use chrono::NaiveDate;
use std::fmt;

/// SNOMED reason code for a drug-overdose encounter
pub const DRUG_OVERDOSE_REASON_CODE: u64 = 55_680_006;

/// Configuration for cohort derivation
#[derive(Debug, Clone)]
pub struct CohortConfig {
    /// Encounter reason code admitted into the cohort
    pub overdose_reason_code: u64,
    /// Encounters must start strictly after this date
    pub cohort_start_date: NaiveDate,
    /// Patients must be strictly older than this at the encounter stop date
    pub min_age: i32,
    /// Patients must be strictly younger than this at the encounter stop date
    pub max_age: i32,
    /// Largest day gap counted as a readmission
    pub readmission_long_window_days: i64,
    /// Largest day gap counted as a short-window readmission
    pub readmission_short_window_days: i64,
    /// Assumed supply window of a prescription with no stop date
    pub open_prescription_window_days: i64,
    /// Description substrings identifying opioid prescriptions (case-sensitive)
    pub opioid_terms: Vec<String>,
}

impl Default for CohortConfig {
    fn default() -> Self {
        Self {
            overdose_reason_code: DRUG_OVERDOSE_REASON_CODE,
            cohort_start_date: NaiveDate::from_ymd_opt(1999, 7, 15).unwrap(),
            min_age: 18,
            max_age: 36,
            readmission_long_window_days: 90,
            readmission_short_window_days: 30,
            open_prescription_window_days: 30,
            opioid_terms: vec![
                "Fentanyl 100 MCG".to_string(),
                "Hydromorphone 325 MG".to_string(),
                "Oxycodone-acetaminophen 100ML".to_string(),
            ],
        }
    }
}

impl fmt::Display for CohortConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cohort Configuration:")?;
        writeln!(f, "  Overdose Reason Code: {}", self.overdose_reason_code)?;
        writeln!(f, "  Cohort Start Date: {}", self.cohort_start_date)?;
        writeln!(f, "  Age Band: {} < age < {}", self.min_age, self.max_age)?;
        writeln!(
            f,
            "  Readmission Windows: {} / {} days",
            self.readmission_long_window_days, self.readmission_short_window_days
        )?;
        writeln!(
            f,
            "  Open Prescription Window: {} days",
            self.open_prescription_window_days
        )?;
        writeln!(f, "  Opioid Terms: {}", self.opioid_terms.join(", "))?;
        Ok(())
    }
}
