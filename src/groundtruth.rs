use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};
use nalgebra as na;

use crate::alignment::{align_positions, euler_deg, relative_rotation};
use crate::error::{parse_f64, CompareError, Result};
use crate::types::{EulerDeg, PoseRecord, TimeRange};

pub const GROUNDTRUTH_FILE: &str = "groundtruth.txt";

/// `id tx ty tz qx qy qz qw`
const GT_FIELDS: usize = 8;

/// Ground truth re-expressed in the frame of its first pose.
#[derive(Debug, Clone)]
pub struct GroundTruth {
    pub timestamps: Vec<f64>,
    /// Origin-aligned, un-rotated and axis-remapped positions.
    pub positions: Vec<na::Vector3<f64>>,
    /// Orientation of each record relative to the first one.
    pub relative_orientations: Vec<na::UnitQuaternion<f64>>,
    pub euler: Vec<EulerDeg>,
    pub time_range: TimeRange,
}

impl GroundTruth {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn roll_deg(&self) -> Vec<f64> {
        self.euler.iter().map(|e| e.roll).collect()
    }

    pub fn pitch_deg(&self) -> Vec<f64> {
        self.euler.iter().map(|e| e.pitch).collect()
    }

    pub fn yaw_deg(&self) -> Vec<f64> {
        self.euler.iter().map(|e| e.yaw).collect()
    }

    /// Aligns raw records. The first record defines the reference frame.
    pub fn from_records(records: &[PoseRecord]) -> Result<GroundTruth> {
        let first = records.first().ok_or(CompareError::EmptyGroundTruth)?;
        let reference = first.orientation.to_rotation_matrix();

        let mut relative_orientations = Vec::with_capacity(records.len());
        let mut euler = Vec::with_capacity(records.len());
        for record in records {
            let rel = relative_rotation(&reference, &record.orientation.to_rotation_matrix());
            euler.push(euler_deg(&rel));
            relative_orientations.push(na::UnitQuaternion::from_rotation_matrix(&rel));
        }
        // records are time-ordered
        let time_range = TimeRange {
            start: first.timestamp,
            end: records[records.len() - 1].timestamp,
        };

        let raw_positions: Vec<_> = records.iter().map(|r| r.position).collect();
        let positions = align_positions(&raw_positions, &relative_orientations[0]);
        debug!(
            "aligned {} ground truth poses, time range [{}, {}]",
            records.len(),
            time_range.start,
            time_range.end
        );

        Ok(GroundTruth {
            timestamps: records.iter().map(|r| r.timestamp).collect(),
            positions,
            relative_orientations,
            euler,
            time_range,
        })
    }
}

/// Parses one data row. Fields past the eighth are ignored.
pub fn parse_pose_line(line: &str, line_number: usize) -> Result<PoseRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < GT_FIELDS {
        return Err(CompareError::FieldCount {
            line: line_number,
            expected: GT_FIELDS,
            found: tokens.len(),
        });
    }
    let mut values = [0.0f64; GT_FIELDS];
    for (v, t) in values.iter_mut().zip(&tokens) {
        *v = parse_f64(t, line_number)?;
    }
    PoseRecord::try_new(
        values[0],
        na::Vector3::new(values[1], values[2], values[3]),
        [values[4], values[5], values[6], values[7]],
    )
    .ok_or(CompareError::InvalidQuaternion { line: line_number })
}

/// Reads raw pose records, skipping `#` comments and blank lines.
pub fn parse_pose_records<R: BufRead>(reader: R) -> Result<Vec<PoseRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        records.push(parse_pose_line(&line, idx + 1)?);
    }
    trace!("parsed {} pose records", records.len());
    Ok(records)
}

pub fn parse_groundtruth<R: BufRead>(reader: R) -> Result<GroundTruth> {
    GroundTruth::from_records(&parse_pose_records(reader)?)
}

/// Loads and aligns a ground-truth log.
pub fn load_groundtruth<P: AsRef<Path>>(path: P) -> Result<GroundTruth> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_groundtruth(BufReader::new(file))
}
