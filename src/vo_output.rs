use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{trace, warn};

use crate::error::{parse_f64, CompareError, Result};
use crate::types::VoSeries;

pub const VO_OUTPUT_FILE: &str = "output_vo.txt";

/// Line tags printed by the VO binary, one value per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoTag {
    X,
    Y,
    Z,
    Roll,
    Pitch,
    Yaw,
}

impl VoTag {
    pub const ALL: [VoTag; 6] = [
        VoTag::X,
        VoTag::Y,
        VoTag::Z,
        VoTag::Roll,
        VoTag::Pitch,
        VoTag::Yaw,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            VoTag::X => "x:",
            VoTag::Y => "y:",
            VoTag::Z => "z:",
            VoTag::Roll => "roll:",
            VoTag::Pitch => "pitch:",
            VoTag::Yaw => "yaw:",
        }
    }

    /// Matches on the start of the raw line, so indented tags are not recognized.
    pub fn from_line(line: &str) -> Option<VoTag> {
        VoTag::ALL.into_iter().find(|t| line.starts_with(t.prefix()))
    }
}

impl VoSeries {
    fn series_mut(&mut self, tag: VoTag) -> &mut Vec<f64> {
        match tag {
            VoTag::X => &mut self.x,
            VoTag::Y => &mut self.y,
            VoTag::Z => &mut self.z,
            VoTag::Roll => &mut self.roll,
            VoTag::Pitch => &mut self.pitch,
            VoTag::Yaw => &mut self.yaw,
        }
    }
}

pub fn parse_vo_output<R: BufRead>(reader: R) -> Result<VoSeries> {
    let mut series = VoSeries::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(tag) = VoTag::from_line(&line) else {
            continue;
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(token) = tokens.get(1) else {
            return Err(CompareError::FieldCount {
                line: idx + 1,
                expected: 2,
                found: tokens.len(),
            });
        };
        series.series_mut(tag).push(parse_f64(token, idx + 1)?);
    }
    trace!(
        "vo series lengths x={} y={} z={} roll={} pitch={} yaw={}",
        series.x.len(),
        series.y.len(),
        series.z.len(),
        series.roll.len(),
        series.pitch.len(),
        series.yaw.len()
    );
    if !series.lengths_consistent() {
        warn!("vo output series have different lengths, each gets its own time axis");
    }
    Ok(series)
}

pub fn load_vo_output<P: AsRef<Path>>(path: P) -> Result<VoSeries> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_vo_output(BufReader::new(file))
}
