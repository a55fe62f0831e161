use nalgebra as na;

/// One row of the ground-truth log.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseRecord {
    pub timestamp: f64,
    pub position: na::Vector3<f64>,
    pub orientation: na::UnitQuaternion<f64>,
}

impl PoseRecord {
    /// Builds a record from the file's `qx qy qz qw` ordering. The quaternion is normalized;
    /// `None` if it has a non-finite component or zero norm.
    pub fn try_new(
        timestamp: f64,
        position: na::Vector3<f64>,
        qxyzw: [f64; 4],
    ) -> Option<PoseRecord> {
        if !qxyzw.iter().all(|v| v.is_finite()) {
            return None;
        }
        let [qx, qy, qz, qw] = qxyzw;
        let orientation =
            na::UnitQuaternion::try_new(na::Quaternion::new(qw, qx, qy, qz), f64::EPSILON)?;
        Some(PoseRecord {
            timestamp,
            position,
            orientation,
        })
    }
}

/// Euler angles in degrees, extrinsic x-y-z order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerDeg {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Per-tag sequences read from the VO output, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub roll: Vec<f64>,
    pub pitch: Vec<f64>,
    pub yaw: Vec<f64>,
}

impl VoSeries {
    /// Number of orientation samples, the count the time axis is built from.
    pub fn len(&self) -> usize {
        self.roll.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roll.is_empty()
    }

    /// Zips x/y/z into points, truncating to the shortest of the three.
    pub fn positions(&self) -> Vec<na::Vector3<f64>> {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((x, y), z)| na::Vector3::new(*x, *y, *z))
            .collect()
    }

    pub fn lengths_consistent(&self) -> bool {
        let n = self.roll.len();
        [&self.x, &self.y, &self.z, &self.pitch, &self.yaw]
            .iter()
            .all(|s| s.len() == n)
    }
}
