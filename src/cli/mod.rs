//! Command-line interface module

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// PUCCH Sweep Plot - renders log-scale BLER-vs-SNR charts from sweep results
#[derive(Parser, Debug, Clone)]
#[command(name = "pucch-sweep-plot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the sweep results JSON file
    #[arg(value_name = "FILE", default_value = crate::defaults::DEFAULT_RESULTS_PATH)]
    pub input: PathBuf,

    /// Write the chart to this path instead of deriving it from FILE
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not open the rendered chart in an image viewer
    #[arg(long)]
    pub no_show: bool,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting color flags
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.input.as_os_str().is_empty() {
            return Err("Input file path cannot be empty".to_string());
        }

        if let Some(ref output) = self.output {
            if output.as_os_str().is_empty() {
                return Err("Output path cannot be empty".to_string());
            }
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Configuration Summary:\n");
        summary.push_str(&format!("  Input file: {}\n", self.input.display()));
        if let Some(ref output) = self.output {
            summary.push_str(&format!("  Output override: {}\n", output.display()));
        }
        summary.push_str(&format!("  Open viewer: {}\n", !self.no_show));
        summary.push_str(&format!("  Colored output: {}\n", self.use_colors()));
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        summary
    }
}

/// Detect whether stdout supports colored output
fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}
