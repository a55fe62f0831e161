use nalgebra as na;

use crate::types::EulerDeg;

/// Orientation of `current` expressed in the frame of `reference`, `reference⁻¹ · current`.
pub fn relative_rotation(
    reference: &na::Rotation3<f64>,
    current: &na::Rotation3<f64>,
) -> na::Rotation3<f64> {
    reference.transpose() * current
}

/// Extrinsic x-y-z Euler angles in degrees, `R = Rz(yaw) · Ry(pitch) · Rx(roll)`.
pub fn euler_deg(rotation: &na::Rotation3<f64>) -> EulerDeg {
    let (roll, pitch, yaw) = rotation.euler_angles();
    EulerDeg {
        roll: roll.to_degrees(),
        pitch: pitch.to_degrees(),
        yaw: yaw.to_degrees(),
    }
}

pub fn rotation_from_euler_deg(euler: &EulerDeg) -> na::Rotation3<f64> {
    na::Rotation3::from_euler_angles(
        euler.roll.to_radians(),
        euler.pitch.to_radians(),
        euler.yaw.to_radians(),
    )
}

/// Shifts every position so the first one lands on the origin.
pub fn subtract_origin(positions: &[na::Vector3<f64>]) -> Vec<na::Vector3<f64>> {
    let Some(origin) = positions.first().copied() else {
        return Vec::new();
    };
    positions.iter().map(|p| p - origin).collect()
}

/// Applies the inverse of `rotation` to each position.
pub fn unrotate(
    positions: &[na::Vector3<f64>],
    rotation: &na::UnitQuaternion<f64>,
) -> Vec<na::Vector3<f64>> {
    let inv = rotation.inverse();
    positions.iter().map(|p| inv * p).collect()
}

/// Ground-truth axes to VO axes: `(a, b, c) -> (a, -c, b)`.
pub fn remap_axes(p: &na::Vector3<f64>) -> na::Vector3<f64> {
    na::Vector3::new(p.x, -p.z, p.y)
}

/// Full position pipeline: origin subtraction, un-rotation by the first relative
/// orientation, then the axis remap.
pub fn align_positions(
    positions: &[na::Vector3<f64>],
    first_relative: &na::UnitQuaternion<f64>,
) -> Vec<na::Vector3<f64>> {
    let centered = subtract_origin(positions);
    unrotate(&centered, first_relative)
        .iter()
        .map(remap_axes)
        .collect()
}
