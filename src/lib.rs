//! PUCCH Sweep Plot
//!
//! A command-line tool that reads the JSON results of a PUCCH Format 2
//! BLER-vs-SNR simulation sweep, groups measurements by payload bit length,
//! and renders one log-scale BLER curve per group into a PNG image.

pub mod cli;
pub mod error;
pub mod loader;
pub mod models;
pub mod output;
pub mod plot;
pub mod sweep;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Measurement, ResultsDocument, SnrRange, SweepMetadata};
pub use sweep::{group_by_bits, GroupedSweep};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    /// Input path used when no positional argument is given
    pub const DEFAULT_RESULTS_PATH: &str = "results/full_snr_sweep.json";

    /// Rendered image size in pixels
    pub const CHART_WIDTH: u32 = 1000;
    pub const CHART_HEIGHT: u32 = 600;

    /// Fixed vertical axis window; BLER outside it is clipped, never an error
    pub const BLER_AXIS_MIN: f64 = 1e-3;
    pub const BLER_AXIS_MAX: f64 = 1.0;

    /// Padding added on each side of the metadata SNR range for the x axis
    pub const SNR_AXIS_PADDING_DB: f64 = 1.0;
}
