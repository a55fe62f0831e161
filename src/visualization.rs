//! Rerun logging of the comparison.
//!
//! Entity hierarchy:
//!     roll/vo, roll/gt       - roll time series (degrees)
//!     pitch/vo, pitch/gt     - pitch time series (degrees)
//!     yaw/vo, yaw/gt         - yaw time series (degrees)
//!     trajectory/vo          - VO positions, own frame
//!     trajectory/gt          - aligned ground-truth positions

use log::{debug, warn};
use nalgebra as na;
use rerun::RecordingStream;

use crate::config::CompareConfig;
use crate::error::Result;
use crate::groundtruth::GroundTruth;
use crate::timeline::synthetic_time;
use crate::types::VoSeries;

pub const TIMELINE: &str = "time";

const VO_COLOR: [u8; 3] = [31, 119, 180];
const GT_COLOR: [u8; 3] = [255, 127, 14];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Angle {
    Roll,
    Pitch,
    Yaw,
}

impl Angle {
    pub const ALL: [Angle; 3] = [Angle::Roll, Angle::Pitch, Angle::Yaw];

    pub fn name(&self) -> &'static str {
        match self {
            Angle::Roll => "roll",
            Angle::Pitch => "pitch",
            Angle::Yaw => "yaw",
        }
    }

    fn of_vo<'a>(&self, vo: &'a VoSeries) -> &'a [f64] {
        match self {
            Angle::Roll => &vo.roll,
            Angle::Pitch => &vo.pitch,
            Angle::Yaw => &vo.yaw,
        }
    }

    fn of_groundtruth(&self, gt: &GroundTruth) -> Vec<f64> {
        match self {
            Angle::Roll => gt.roll_deg(),
            Angle::Pitch => gt.pitch_deg(),
            Angle::Yaw => gt.yaw_deg(),
        }
    }
}

/// Static line style for one series; names show up in the plot legend.
pub fn log_series_style(
    recording: &RecordingStream,
    entity: &str,
    name: String,
    color: [u8; 3],
) -> Result<()> {
    recording.log_static(
        entity,
        &rerun::SeriesLines::new()
            .with_names([name])
            .with_colors([color]),
    )?;
    Ok(())
}

/// Logs `values` against `times` on the duration timeline.
pub fn log_scalar_series(
    recording: &RecordingStream,
    entity: &str,
    times: &[f64],
    values: &[f64],
) -> Result<()> {
    for (t, v) in times.iter().zip(values) {
        recording.set_duration_secs(TIMELINE, *t);
        recording.log(entity, &rerun::Scalars::new([*v]))?;
    }
    Ok(())
}

/// One line of an angle panel, ready to log.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSeries {
    pub entity: String,
    pub name: String,
    pub color: [u8; 3],
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

/// The VO and ground-truth lines of one angle, in that order.
pub fn panel_series(
    angle: Angle,
    vo: &VoSeries,
    gt: &GroundTruth,
    time_span: f64,
) -> [PanelSeries; 2] {
    let name = angle.name();
    let vo_values = angle.of_vo(vo).to_vec();
    let gt_values = angle.of_groundtruth(gt);
    [
        PanelSeries {
            entity: format!("{}/vo", name),
            name: format!("vo {}", name),
            color: VO_COLOR,
            times: synthetic_time(vo_values.len(), time_span),
            values: vo_values,
        },
        PanelSeries {
            entity: format!("{}/gt", name),
            name: format!("gt {}", name),
            color: GT_COLOR,
            times: synthetic_time(gt_values.len(), time_span),
            values: gt_values,
        },
    ]
}

pub fn log_angle_panel(
    recording: &RecordingStream,
    angle: Angle,
    vo: &VoSeries,
    gt: &GroundTruth,
    time_span: f64,
) -> Result<()> {
    for series in panel_series(angle, vo, gt, time_span) {
        log_series_style(recording, &series.entity, series.name, series.color)?;
        log_scalar_series(recording, &series.entity, &series.times, &series.values)?;
        debug!("{}: {} samples", series.entity, series.values.len());
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryStrip {
    pub entity: &'static str,
    pub color: [u8; 3],
    pub points: Vec<[f32; 3]>,
}

/// `None` when there are fewer than two positions to connect.
pub fn trajectory_strip(
    entity: &'static str,
    positions: &[na::Vector3<f64>],
    color: [u8; 3],
) -> Option<TrajectoryStrip> {
    if positions.len() < 2 {
        warn!("skip {}: {} positions", entity, positions.len());
        return None;
    }
    Some(TrajectoryStrip {
        entity,
        color,
        points: positions
            .iter()
            .map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect(),
    })
}

/// Strips to draw in the 3D view; empty when trajectories are disabled.
pub fn trajectory_strips(
    gt: &GroundTruth,
    vo: &VoSeries,
    config: &CompareConfig,
) -> Vec<TrajectoryStrip> {
    if !config.log_trajectories {
        return Vec::new();
    }
    [
        trajectory_strip("trajectory/vo", &vo.positions(), VO_COLOR),
        trajectory_strip("trajectory/gt", &gt.positions, GT_COLOR),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn log_trajectory(recording: &RecordingStream, strip: &TrajectoryStrip) -> Result<()> {
    recording.log_static(
        strip.entity,
        &rerun::LineStrips3D::new([strip.points.clone()])
            .with_colors([strip.color])
            .with_radii([0.005f32]),
    )?;
    Ok(())
}

/// Logs the three angle panels and, if enabled, both position trajectories.
pub fn log_comparison(
    recording: &RecordingStream,
    gt: &GroundTruth,
    vo: &VoSeries,
    config: &CompareConfig,
) -> Result<()> {
    config.validate()?;
    for angle in Angle::ALL {
        log_angle_panel(recording, angle, vo, gt, config.time_span)?;
    }
    for strip in trajectory_strips(gt, vo, config) {
        log_trajectory(recording, &strip)?;
    }
    Ok(())
}
