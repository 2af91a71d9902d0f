//! Readmission detection
//!
//! Per-patient chronological scan that flags encounters followed by
//! another qualifying overdose encounter within the study windows.

use itertools::Itertools;
use smallvec::SmallVec;

use crate::config::CohortConfig;
use crate::models::QualifyingEncounter;

// Most patients have very few qualifying encounters
type IndexChain = SmallVec<[usize; 4]>;

/// Annotate each encounter with the readmission indicators.
///
/// Encounters are grouped by patient and ranked by start date, ties
/// broken by encounter id so that shared start dates stay deterministic.
/// Each encounter is compared against exactly its immediate successor in
/// that order: when the day gap between the successor's start and the
/// current stop is within the long window, the long-window flag and first
/// readmission date are set, and the short-window flag as well when the
/// gap is within the short window. The gap may be negative (the successor
/// starts before the current stop) and is compared like any other value.
pub fn annotate_readmissions(encounters: &mut [QualifyingEncounter], config: &CohortConfig) {
    let mut chains: Vec<IndexChain> = encounters
        .iter()
        .enumerate()
        .map(|(index, encounter)| (encounter.patient_id.clone(), index))
        .into_group_map()
        .into_values()
        .map(IndexChain::from_vec)
        .collect();

    for chain in &mut chains {
        chain.sort_by(|&a, &b| {
            encounters[a]
                .start
                .cmp(&encounters[b].start)
                .then_with(|| encounters[a].encounter_id.cmp(&encounters[b].encounter_id))
        });
    }

    for chain in &chains {
        for (&current, &next) in chain.iter().tuple_windows() {
            let next_start = encounters[next].start;
            let record = &mut encounters[current];
            let gap = (next_start - record.stop).num_days();
            if gap <= config.readmission_long_window_days {
                record.readmitted_within_90 = true;
                record.first_readmission_date = Some(next_start);
                if gap <= config.readmission_short_window_days {
                    record.readmitted_within_30 = true;
                }
            }
        }
    }
}
