#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use overdose_cohort::config::CohortConfig;
    use overdose_cohort::error::CohortError;
    use overdose_cohort::models::PrescriptionInterval;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn bounded(start: NaiveDate, stop: NaiveDate) -> PrescriptionInterval {
        PrescriptionInterval::new(
            "p1".to_string(),
            "Lisinopril 10 MG Oral Tablet".to_string(),
            start,
            Some(stop),
        )
    }

    fn open_ended(start: NaiveDate) -> PrescriptionInterval {
        PrescriptionInterval::new(
            "p1".to_string(),
            "Lisinopril 10 MG Oral Tablet".to_string(),
            start,
            None,
        )
    }

    #[test]
    fn test_bounded_interval_is_open() {
        let prescription = bounded(date(2010, 1, 1), date(2010, 1, 31));
        // Strictly inside counts
        assert!(prescription.active_at(&date(2010, 1, 2), 30));
        assert!(prescription.active_at(&date(2010, 1, 30), 30));
        // Boundary equality does not
        assert!(!prescription.active_at(&date(2010, 1, 1), 30));
        assert!(!prescription.active_at(&date(2010, 1, 31), 30));
        // Outside does not
        assert!(!prescription.active_at(&date(2009, 12, 31), 30));
        assert!(!prescription.active_at(&date(2010, 2, 1), 30));
    }

    #[test]
    fn test_open_ended_window_edges() {
        let prescription = open_ended(date(2010, 1, 1));
        // Day 0 and day 29 are inside the supply window
        assert!(prescription.active_at(&date(2010, 1, 1), 30));
        assert!(prescription.active_at(&date(2010, 1, 30), 30));
        // Day 30 and beyond are not
        assert!(!prescription.active_at(&date(2010, 1, 31), 30));
        assert!(!prescription.active_at(&date(2011, 1, 1), 30));
        // An encounter before the prescription start is not covered
        assert!(!prescription.active_at(&date(2009, 12, 31), 30));
    }

    #[test]
    fn test_validate_rejects_inverted_interval() {
        let prescription = bounded(date(2010, 1, 31), date(2010, 1, 1));
        assert!(matches!(
            prescription.validate(),
            Err(CohortError::MalformedInterval { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_zero_length_and_open_intervals() {
        assert!(bounded(date(2010, 1, 1), date(2010, 1, 1)).validate().is_ok());
        assert!(open_ended(date(2010, 1, 1)).validate().is_ok());
    }

    #[test]
    fn test_opioid_term_matching() {
        let terms = CohortConfig::default().opioid_terms;

        let fentanyl = PrescriptionInterval::new(
            "p1".to_string(),
            "Fentanyl 100 MCG Transdermal System".to_string(),
            date(2010, 1, 1),
            None,
        );
        assert!(fentanyl.is_opioid(&terms));

        let hydromorphone = PrescriptionInterval::new(
            "p1".to_string(),
            "Hydromorphone 325 MG".to_string(),
            date(2010, 1, 1),
            None,
        );
        assert!(hydromorphone.is_opioid(&terms));

        // Containment is case-sensitive
        let lowercase = PrescriptionInterval::new(
            "p1".to_string(),
            "fentanyl 100 mcg".to_string(),
            date(2010, 1, 1),
            None,
        );
        assert!(!lowercase.is_opioid(&terms));

        let acetaminophen = PrescriptionInterval::new(
            "p1".to_string(),
            "Acetaminophen 325 MG Oral Tablet".to_string(),
            date(2010, 1, 1),
            None,
        );
        assert!(!acetaminophen.is_opioid(&terms));
    }
}
