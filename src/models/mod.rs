//! Data models for sweep results documents

pub mod document;

pub use document::{Measurement, ResultsDocument, SnrRange, SweepMetadata};
