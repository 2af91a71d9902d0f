#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use overdose_cohort::algorithm::annotate_medications;
    use overdose_cohort::config::CohortConfig;
    use overdose_cohort::error::CohortError;
    use overdose_cohort::models::{
        Patient, PatientIndex, PrescriptionInterval, QualifyingEncounter,
    };

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn visit(id: &str, patient_id: &str, start: NaiveDate) -> QualifyingEncounter {
        QualifyingEncounter::new(
            id.to_string(),
            patient_id.to_string(),
            start,
            start,
            25,
            false,
        )
    }

    fn prescription(
        patient_id: &str,
        description: &str,
        start: NaiveDate,
        stop: Option<NaiveDate>,
    ) -> PrescriptionInterval {
        PrescriptionInterval::new(patient_id.to_string(), description.to_string(), start, stop)
    }

    fn index() -> PatientIndex {
        PatientIndex::from_patients(vec![
            Patient::new("p1".to_string(), date(1985, 1, 1), None),
            Patient::new("p2".to_string(), date(1987, 1, 1), None),
        ])
    }

    #[test]
    fn test_counts_active_prescriptions() {
        let mut encounters = vec![visit("e1", "p1", date(2010, 1, 10))];
        let prescriptions = vec![
            prescription(
                "p1",
                "Lisinopril 10 MG Oral Tablet",
                date(2010, 1, 1),
                Some(date(2010, 2, 1)),
            ),
            prescription(
                "p1",
                "Amoxicillin 250 MG Oral Capsule",
                date(2009, 1, 1),
                Some(date(2009, 2, 1)),
            ),
            prescription("p1", "Ibuprofen 200 MG Oral Tablet", date(2010, 1, 1), None),
        ];

        annotate_medications(
            &mut encounters,
            &prescriptions,
            &index(),
            &CohortConfig::default(),
        )
        .unwrap();

        assert_eq!(encounters[0].active_medication_count, 2);
        assert!(!encounters[0].opioid_active);
    }

    #[test]
    fn test_opioid_indicator_is_monotone() {
        let mut encounters = vec![visit("e1", "p1", date(2010, 1, 10))];
        // The opioid comes first; a later non-opioid must not reset the flag
        let prescriptions = vec![
            prescription(
                "p1",
                "Fentanyl 100 MCG Transdermal System",
                date(2010, 1, 1),
                Some(date(2010, 2, 1)),
            ),
            prescription(
                "p1",
                "Lisinopril 10 MG Oral Tablet",
                date(2010, 1, 1),
                Some(date(2010, 2, 1)),
            ),
        ];

        annotate_medications(
            &mut encounters,
            &prescriptions,
            &index(),
            &CohortConfig::default(),
        )
        .unwrap();

        assert_eq!(encounters[0].active_medication_count, 2);
        assert!(encounters[0].opioid_active);
    }

    #[test]
    fn test_boundary_dates_are_not_active() {
        let mut encounters = vec![visit("e1", "p1", date(2010, 1, 10))];
        let prescriptions = vec![
            // Stops exactly on the encounter start
            prescription(
                "p1",
                "Lisinopril 10 MG Oral Tablet",
                date(2010, 1, 1),
                Some(date(2010, 1, 10)),
            ),
            // Starts exactly on the encounter start
            prescription(
                "p1",
                "Amoxicillin 250 MG Oral Capsule",
                date(2010, 1, 10),
                Some(date(2010, 2, 1)),
            ),
        ];

        annotate_medications(
            &mut encounters,
            &prescriptions,
            &index(),
            &CohortConfig::default(),
        )
        .unwrap();

        assert_eq!(encounters[0].active_medication_count, 0);
    }

    #[test]
    fn test_join_is_bounded_to_cohort_patients() {
        // p2 is in the index but has no qualifying encounter
        let mut encounters = vec![visit("e1", "p1", date(2010, 1, 10))];
        let prescriptions = vec![prescription(
            "p2",
            "Lisinopril 10 MG Oral Tablet",
            date(2010, 1, 1),
            Some(date(2010, 2, 1)),
        )];

        annotate_medications(
            &mut encounters,
            &prescriptions,
            &index(),
            &CohortConfig::default(),
        )
        .unwrap();

        assert_eq!(encounters[0].active_medication_count, 0);
    }

    #[test]
    fn test_unknown_patient_is_a_hard_failure() {
        let mut encounters = vec![visit("e1", "p1", date(2010, 1, 10))];
        let prescriptions = vec![prescription(
            "ghost",
            "Lisinopril 10 MG Oral Tablet",
            date(2010, 1, 1),
            None,
        )];

        let result = annotate_medications(
            &mut encounters,
            &prescriptions,
            &index(),
            &CohortConfig::default(),
        );
        assert!(matches!(
            result,
            Err(CohortError::UnknownPatient { context: "prescription", .. })
        ));
    }

    #[test]
    fn test_malformed_interval_is_a_hard_failure() {
        let mut encounters = vec![visit("e1", "p1", date(2010, 1, 10))];
        let prescriptions = vec![prescription(
            "p1",
            "Lisinopril 10 MG Oral Tablet",
            date(2010, 2, 1),
            Some(date(2010, 1, 1)),
        )];

        let result = annotate_medications(
            &mut encounters,
            &prescriptions,
            &index(),
            &CohortConfig::default(),
        );
        assert!(matches!(
            result,
            Err(CohortError::MalformedInterval { .. })
        ));
    }

    #[test]
    fn test_no_prescriptions_is_a_zero_state() {
        let mut encounters = vec![visit("e1", "p1", date(2010, 1, 10))];

        annotate_medications(&mut encounters, &[], &index(), &CohortConfig::default()).unwrap();

        assert_eq!(encounters[0].active_medication_count, 0);
        assert!(!encounters[0].opioid_active);
    }
}
