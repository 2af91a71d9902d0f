//! Error handling for the cohort derivation pipeline.

use chrono::NaiveDate;

/// Specialized error type for cohort derivation
#[derive(Debug, thiserror::Error)]
pub enum CohortError {
    /// A row references a patient id that is not in the patient index
    #[error("unknown patient {patient_id} referenced by {context} row")]
    UnknownPatient {
        /// The dangling patient identifier
        patient_id: String,
        /// Which input table held the reference
        context: &'static str,
    },

    /// A prescription interval ends before it starts
    #[error("prescription for patient {patient_id} stops {stop} before it starts {start}")]
    MalformedInterval {
        /// Patient the prescription belongs to
        patient_id: String,
        /// Prescription start date
        start: NaiveDate,
        /// Prescription stop date
        stop: NaiveDate,
    },

    /// A date field could not be parsed with any supported format
    #[error("unparseable date {value:?} in column {column}")]
    DateParse {
        /// Column the value came from
        column: &'static str,
        /// The offending field content
        value: String,
    },

    /// Error reading or writing CSV data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cohort derivation operations
pub type Result<T> = std::result::Result<T, CohortError>;
