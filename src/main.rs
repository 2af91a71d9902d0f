use anyhow::Context;
use log::info;
use overdose_cohort::{CohortConfig, PatientIndex, algorithm, reader, report};
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let data_dir = args
        .next()
        .map_or_else(|| PathBuf::from("datasets"), PathBuf::from);
    let output_path = args
        .next()
        .map_or_else(|| PathBuf::from("indicators.csv"), PathBuf::from);

    let config = CohortConfig::default();
    info!("{config}");

    let patients =
        reader::load_patients(&data_dir.join("patients.csv")).context("loading patient extract")?;
    let patient_index = PatientIndex::from_patients(patients);
    let encounters = reader::load_encounters(&data_dir.join("encounters.csv"))
        .context("loading encounter extract")?;
    let prescriptions = reader::load_prescriptions(&data_dir.join("medications.csv"))
        .context("loading medication extract")?;

    let start = Instant::now();
    let (rows, stats) =
        algorithm::derive_indicators(&encounters, &patient_index, &prescriptions, &config)?;
    info!(
        "derived {} indicator rows ({stats}) in {:?}",
        rows.len(),
        start.elapsed()
    );

    report::write_csv_file(&rows, &output_path)
        .with_context(|| format!("writing {}", output_path.display()))?;
    info!("wrote {}", output_path.display());

    Ok(())
}
