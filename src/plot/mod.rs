//! Chart rendering for grouped sweep results
//!
//! Third stage of the pipeline: draw one log-scale BLER curve per payload
//! bit length into a PNG, then hand the image to the platform viewer on a
//! best-effort basis.

use crate::{
    defaults::{BLER_AXIS_MAX, BLER_AXIS_MIN, CHART_HEIGHT, CHART_WIDTH, SNR_AXIS_PADDING_DB},
    error::{AppError, Result},
    models::{SnrRange, SweepMetadata},
    sweep::GroupedSweep,
};
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Derive the image output path from the input path.
///
/// A final `.json` suffix (exact case) becomes `.png`; any other path is
/// returned unchanged. The caller is responsible for refusing the resulting
/// collision when no suffix was replaced.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let raw = input.to_string_lossy();
    match raw.strip_suffix(".json") {
        Some(stem) => PathBuf::from(format!("{}.png", stem)),
        None => input.to_path_buf(),
    }
}

/// Horizontal axis window: the metadata SNR range padded by one dB per side
pub fn snr_axis_range(range: &SnrRange) -> Range<f64> {
    (range.start - SNR_AXIS_PADDING_DB)..(range.end + SNR_AXIS_PADDING_DB)
}

/// One viridis color per group, sampled evenly across the colormap.
///
/// Groups are colored in ascending bit-length order, so identical input
/// always yields identical color assignments.
pub fn curve_palette(num_groups: usize) -> Vec<RGBColor> {
    (0..num_groups)
        .map(|i| {
            let t = if num_groups > 1 {
                i as f32 / (num_groups - 1) as f32
            } else {
                0.0
            };
            ViridisRGB.get_color(t)
        })
        .collect()
}

/// Render the grouped sweep into a PNG at `output`.
///
/// Zero groups produce an empty chart with axes and no curves. BLER values
/// outside the fixed vertical window are clipped by the backend.
pub fn render_chart(
    groups: &GroupedSweep,
    metadata: &SweepMetadata,
    output: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(output, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AppError::render(e.to_string()))?;

    let caption = format!(
        "PUCCH Format 2: BLER vs SNR (Iterations: {}, Step: {} dB)",
        metadata.iterations, metadata.snr_range.step
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            snr_axis_range(&metadata.snr_range),
            (BLER_AXIS_MIN..BLER_AXIS_MAX).log_scale(),
        )
        .map_err(|e| AppError::render(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("SNR (dB)")
        .y_desc("BLER")
        .draw()
        .map_err(|e| AppError::render(e.to_string()))?;

    let colors = curve_palette(groups.len());

    for ((bits, observations), color) in groups.iter().zip(colors) {
        chart
            .draw_series(LineSeries::new(
                observations.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(|e| AppError::render(e.to_string()))?
            .label(format!("n = {} bits", bits))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart
            .draw_series(
                observations
                    .iter()
                    .map(|&(snr, bler)| Circle::new((snr, bler), 4, color.filled())),
            )
            .map_err(|e| AppError::render(e.to_string()))?;
    }

    if !groups.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| AppError::render(e.to_string()))?;
    }

    root.present()
        .map_err(|e| AppError::render(e.to_string()))?;
    Ok(())
}

/// Open the rendered image in the platform viewer.
///
/// Best-effort only: headless environments and spawn failures are silently
/// ignored so the tool never fails after the image is already on disk.
pub fn show_preview(path: &Path) {
    if !display_available() {
        return;
    }
    if let Some(mut command) = viewer_command(path) {
        let _ = command
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
    }
}

fn display_available() -> bool {
    if cfg!(target_os = "linux") {
        std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
    } else {
        true
    }
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Option<Command> {
    let mut command = Command::new("open");
    command.arg(path);
    Some(command)
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Option<Command> {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    Some(command)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn viewer_command(path: &Path) -> Option<Command> {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    Some(command)
}

#[cfg(not(any(unix, target_os = "windows")))]
fn viewer_command(_path: &Path) -> Option<Command> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Measurement;
    use crate::sweep::group_by_bits;
    use std::collections::BTreeMap;

    fn sample_metadata() -> SweepMetadata {
        SweepMetadata {
            iterations: 1000,
            snr_range: SnrRange {
                start: -5.0,
                end: 10.0,
                step: 1.0,
            },
        }
    }

    #[test]
    fn test_output_path_replaces_json_suffix() {
        assert_eq!(
            derive_output_path(Path::new("results/full_snr_sweep.json")),
            PathBuf::from("results/full_snr_sweep.png")
        );
    }

    #[test]
    fn test_output_path_is_case_sensitive() {
        assert_eq!(
            derive_output_path(Path::new("data.JSON")),
            PathBuf::from("data.JSON")
        );
    }

    #[test]
    fn test_output_path_without_suffix_is_unchanged() {
        assert_eq!(
            derive_output_path(Path::new("results/sweep")),
            PathBuf::from("results/sweep")
        );
    }

    #[test]
    fn test_snr_axis_range_pads_one_db() {
        let range = snr_axis_range(&sample_metadata().snr_range);
        assert_eq!(range.start, -6.0);
        assert_eq!(range.end, 11.0);
    }

    #[test]
    fn test_palette_size_matches_group_count() {
        assert!(curve_palette(0).is_empty());
        assert_eq!(curve_palette(1).len(), 1);
        assert_eq!(curve_palette(5).len(), 5);
    }

    #[test]
    fn test_palette_is_deterministic_and_distinct() {
        let first = curve_palette(4);
        let second = curve_palette(4);
        assert_eq!(first, second);

        // Evenly spaced viridis samples never repeat a color
        for (i, a) in first.iter().enumerate() {
            for b in first.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sweep.png");

        let results = vec![
            Measurement {
                num_of_pucch_f2_bits: 20,
                snr_db: 0.0,
                bler: 0.1,
            },
            Measurement {
                num_of_pucch_f2_bits: 20,
                snr_db: -2.0,
                bler: 0.5,
            },
            Measurement {
                num_of_pucch_f2_bits: 40,
                snr_db: 0.0,
                bler: 0.05,
            },
        ];
        let groups = group_by_bits(&results);

        render_chart(&groups, &sample_metadata(), &output).unwrap();
        let written = std::fs::metadata(&output).unwrap();
        assert!(written.len() > 0);
    }

    #[test]
    fn test_render_handles_zero_groups() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("empty.png");

        render_chart(&BTreeMap::new(), &sample_metadata(), &output).unwrap();
        assert!(output.exists());
    }
}
