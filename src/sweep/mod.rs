//! Grouping and ordering of sweep measurements
//!
//! Second stage of the pipeline: partition the flat measurement list by
//! payload bit length and order each group's (SNR, BLER) observations by
//! ascending SNR. Pure transformation; no record is dropped or validated
//! numerically.

use crate::models::Measurement;
use std::collections::BTreeMap;

/// Measurements partitioned by payload bit length, each group holding
/// (snr_db, bler) pairs sorted ascending by SNR.
///
/// A `BTreeMap` keeps iteration in ascending key order, which fixes the
/// color and legend ordering for the renderer.
pub type GroupedSweep = BTreeMap<u32, Vec<(f64, f64)>>;

/// Partition measurements by `num_of_pucch_f2_bits` and sort each group's
/// observations by ascending `snr_db`.
///
/// The sort is stable: records sharing both bit length and SNR keep their
/// relative input order. Empty input yields an empty map.
pub fn group_by_bits(results: &[Measurement]) -> GroupedSweep {
    let mut groups: GroupedSweep = BTreeMap::new();

    for record in results {
        groups
            .entry(record.num_of_pucch_f2_bits)
            .or_default()
            .push((record.snr_db, record.bler));
    }

    for observations in groups.values_mut() {
        // Vec::sort_by is stable; NaN SNR compares as equal and passes
        // through uninterpreted, per the no-validation contract.
        observations.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    }

    groups
}
