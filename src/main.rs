//! PUCCH Sweep Plot - Main CLI Application
//!
//! Reads a PUCCH Format 2 BLER sweep results file, groups measurements by
//! payload bit length, and renders a log-scale BLER-vs-SNR chart.

use clap::Parser;
use pucch_sweep_plot::{
    cli::Cli,
    error::{AppError, Result},
    loader,
    output::SummaryFormatter,
    plot, sweep, PKG_NAME, VERSION,
};
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    // Handle the actual application logic
    if let Err(e) = run_application(cli) {
        eprintln!("Error: {}", e);

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    // Show debug info if requested
    if cli.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("Debug mode enabled");
        println!();
        println!("{}", cli.get_config_summary());
    }

    cli.validate().map_err(AppError::validation)?;

    // Stage 1: load and parse the results document
    let document = loader::load_results(&cli.input)?;

    if cli.debug {
        println!("Results document loaded:");
        println!("  Measurements: {}", document.results.len());
        println!("  Iterations per point: {}", document.metadata.iterations);
        println!(
            "  SNR range: {} dB to {} dB, step {} dB",
            document.metadata.snr_range.start,
            document.metadata.snr_range.end,
            document.metadata.snr_range.step
        );
        println!();
    }

    // Stage 2: group by payload length, sort each group by SNR
    let groups = sweep::group_by_bits(&document.results);

    let formatter = SummaryFormatter::new(cli.use_colors());

    if cli.verbose || cli.debug {
        print!("{}", formatter.format_group_summary(&groups));
        println!();
    }

    // Stage 3: render the chart beside the input file
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| plot::derive_output_path(&cli.input));

    // A suffix-free input derives to itself; refuse to overwrite the data
    if output_path == cli.input {
        return Err(AppError::validation(format!(
            "derived output path '{}' would overwrite the input file; pass --output to choose another location",
            output_path.display()
        )));
    }

    plot::render_chart(&groups, &document.metadata, &output_path)?;

    println!("{}", formatter.format_confirmation(&output_path));

    // Best-effort interactive preview; never fatal
    if !cli.no_show {
        plot::show_preview(&output_path);
    }

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::FileNotFound(_) => {
            eprintln!();
            eprintln!("File help:");
            eprintln!("  - Check the path for typos");
            eprintln!("  - Run the sweep tool first to produce a results file");
            eprintln!("  - The default input path is 'results/full_snr_sweep.json'");
        }
        AppError::MalformedInput(_) => {
            eprintln!();
            eprintln!("Input format help:");
            eprintln!("  - The file must be JSON with 'metadata' and 'results' fields");
            eprintln!("  - 'metadata' needs 'iterations' and 'snr_range' (start/end/step)");
            eprintln!("  - Each result needs 'num_of_pucch_f2_bits', 'snr_db', and 'bler'");
        }
        AppError::Validation(_) => {
            eprintln!();
            eprintln!("Usage help:");
            eprintln!("  - Run with --help for the full option list");
            eprintln!("  - Use --output to pick an explicit image path");
        }
        AppError::Render(_) => {
            eprintln!();
            eprintln!("Render troubleshooting:");
            eprintln!("  - Check that the output directory exists and is writable");
            eprintln!("  - Check available disk space");
        }
        _ => {}
    }
}
