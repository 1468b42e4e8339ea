//! Results document data model
//!
//! Mirrors the JSON layout written by the sweep tool: a `metadata` block
//! describing the run and a flat `results` array of measurements. The whole
//! model is read-only after parsing; nothing here is mutated or persisted.

use serde::{Deserialize, Serialize};

/// Top-level results document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsDocument {
    /// Run parameters recorded by the sweep tool
    pub metadata: SweepMetadata,

    /// Flat measurement records in sweep order
    pub results: Vec<Measurement>,
}

/// Sweep run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepMetadata {
    /// Monte-Carlo iterations per (bits, SNR) point
    pub iterations: u64,

    /// SNR range covered by the sweep
    pub snr_range: SnrRange,
}

/// SNR range in dB
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SnrRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

/// A single BLER measurement at one (payload length, SNR) point
///
/// Duplicate (bits, snr) pairs are legal; every record is kept and plotted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Measurement {
    /// PUCCH Format 2 payload length in bits
    pub num_of_pucch_f2_bits: u32,

    /// Signal-to-noise ratio in dB
    pub snr_db: f64,

    /// Block error rate observed at this point
    pub bler: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "metadata": {
            "iterations": 1000,
            "snr_range": { "start": -5, "end": 10, "step": 1 }
        },
        "results": [
            { "num_of_pucch_f2_bits": 20, "snr_db": 0, "bler": 0.1 },
            { "num_of_pucch_f2_bits": 20, "snr_db": -2, "bler": 0.5 },
            { "num_of_pucch_f2_bits": 40, "snr_db": 0, "bler": 0.05 }
        ]
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let doc: ResultsDocument = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(doc.metadata.iterations, 1000);
        assert_eq!(doc.metadata.snr_range.start, -5.0);
        assert_eq!(doc.metadata.snr_range.end, 10.0);
        assert_eq!(doc.metadata.snr_range.step, 1.0);
        assert_eq!(doc.results.len(), 3);
        assert_eq!(doc.results[1].num_of_pucch_f2_bits, 20);
        assert_eq!(doc.results[1].snr_db, -2.0);
        assert_eq!(doc.results[1].bler, 0.5);
    }

    #[test]
    fn test_empty_results_is_valid() {
        let doc: ResultsDocument = serde_json::from_str(
            r#"{"metadata":{"iterations":1,"snr_range":{"start":0,"end":1,"step":1}},"results":[]}"#,
        )
        .unwrap();
        assert!(doc.results.is_empty());
    }

    #[test]
    fn test_missing_results_key_fails() {
        let err = serde_json::from_str::<ResultsDocument>(
            r#"{"metadata":{"iterations":1,"snr_range":{"start":0,"end":1,"step":1}}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("results"));
    }

    #[test]
    fn test_wrong_field_type_fails() {
        assert!(serde_json::from_str::<ResultsDocument>(
            r#"{"metadata":{"iterations":"many","snr_range":{"start":0,"end":1,"step":1}},"results":[]}"#,
        )
        .is_err());
    }
}
