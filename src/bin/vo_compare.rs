use clap::Parser;
use std::time::Instant;
use vo_gt_compare::config::CompareConfig;
use vo_gt_compare::groundtruth::{load_groundtruth, GROUNDTRUTH_FILE};
use vo_gt_compare::io::{object_from_json, object_to_json_string};
use vo_gt_compare::visualization::log_comparison;
use vo_gt_compare::vo_output::{load_vo_output, VO_OUTPUT_FILE};

/// Plots VO roll/pitch/yaw against ground truth.
///
/// Reads groundtruth.txt and output_vo.txt from the working directory.
#[derive(Parser)]
#[command(version, about, author)]
struct VoCompareCli {
    /// JSON file overriding the plot configuration
    #[arg(short, long)]
    config: Option<String>,

    /// span of the synthetic time axis
    #[arg(long)]
    time_span: Option<f64>,

    /// do not log the 3D position trajectories
    #[arg(long)]
    no_trajectory: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = VoCompareCli::parse();

    let mut config: CompareConfig = match &cli.config {
        Some(path) => object_from_json(path)?,
        None => CompareConfig::default(),
    };
    if let Some(span) = cli.time_span {
        config.time_span = span;
    }
    if cli.no_trajectory {
        config.log_trajectories = false;
    }
    config.validate()?;
    log::debug!("config: {}", object_to_json_string(&config)?);

    let now = Instant::now();
    let groundtruth = load_groundtruth(GROUNDTRUTH_FILE)?;
    log::info!(
        "ground truth: {} poses over {:.3} s ([{:.6}, {:.6}])",
        groundtruth.len(),
        groundtruth.time_range.duration(),
        groundtruth.time_range.start,
        groundtruth.time_range.end
    );
    let vo = load_vo_output(VO_OUTPUT_FILE)?;
    log::info!("vo output: {} samples", vo.len());
    log::info!("loading took {:.6} sec", now.elapsed().as_secs_f64());
    log::warn!(
        "vo trajectory is plotted in its own frame, it is not aligned to the ground truth initial pose"
    );

    let recording = rerun::RecordingStreamBuilder::new(config.app_id.as_str()).spawn()?;
    log_comparison(&recording, &groundtruth, &vo, &config)?;
    recording.flush_blocking();
    Ok(())
}
