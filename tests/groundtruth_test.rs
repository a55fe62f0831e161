use std::io::Cursor;

use nalgebra as na;
use vo_gt_compare::alignment::rotation_from_euler_deg;
use vo_gt_compare::groundtruth::{load_groundtruth, parse_groundtruth};
use vo_gt_compare::types::EulerDeg;

fn line(t: f64, p: [f64; 3], q: &na::UnitQuaternion<f64>) -> String {
    format!(
        "{} {} {} {} {} {} {} {}\n",
        t, p[0], p[1], p[2], q.i, q.j, q.k, q.w
    )
}

#[test]
fn test_two_record_identity() {
    let text = "# id tx ty tz qx qy qz qw\n\
                1 0 0 0 0 0 0 1\n\
                2 1 0 0 0 0 0 1\n";
    let gt = parse_groundtruth(Cursor::new(text)).unwrap();

    assert_eq!(gt.len(), 2);
    for e in &gt.euler {
        assert!(e.roll.abs() < 1e-12);
        assert!(e.pitch.abs() < 1e-12);
        assert!(e.yaw.abs() < 1e-12);
    }
    let tx: Vec<f64> = gt.positions.iter().map(|p| p.x).collect();
    assert!((tx[0] - 0.0).abs() < 1e-12);
    assert!((tx[1] - 1.0).abs() < 1e-12);
    assert!((gt.time_range.start - 1.0).abs() < 1e-12);
    assert!((gt.time_range.end - 2.0).abs() < 1e-12);
}

#[test]
fn test_single_record_is_origin_and_identity() {
    let q = na::UnitQuaternion::from_euler_angles(0.4, -0.1, 2.0);
    let text = line(5.0, [3.0, -2.0, 7.5], &q);
    let gt = parse_groundtruth(Cursor::new(text)).unwrap();

    assert_eq!(gt.len(), 1);
    assert!(gt.positions[0].norm() < 1e-12);
    assert!(gt.relative_orientations[0].angle() < 1e-6);
    assert!(gt.euler[0].roll.abs() < 1e-9);
    assert!(gt.euler[0].pitch.abs() < 1e-9);
    assert!(gt.euler[0].yaw.abs() < 1e-9);
}

#[test]
fn test_relative_orientation_matches_euler_roundtrip() {
    let q0 = na::UnitQuaternion::from_euler_angles(0.2, 0.1, -0.5);
    let mut text = String::new();
    for i in 0..10 {
        let dq = na::UnitQuaternion::from_euler_angles(0.05 * i as f64, -0.03 * i as f64, 0.2 * i as f64);
        text += &line(i as f64, [i as f64, 0.5, -0.2], &(q0 * dq));
    }
    let gt = parse_groundtruth(Cursor::new(text)).unwrap();

    for (q, e) in gt.relative_orientations.iter().zip(&gt.euler) {
        let via_euler = na::UnitQuaternion::from_rotation_matrix(&rotation_from_euler_deg(e));
        assert!(q.angle_to(&via_euler) < 1e-6);
    }
}

#[test]
fn test_relative_orientation_undoes_first_pose() {
    let q0 = na::UnitQuaternion::from_euler_angles(0.0, 0.0, std::f64::consts::FRAC_PI_2);
    let q1 = q0 * na::UnitQuaternion::from_euler_angles(0.0, 0.0, 10f64.to_radians());
    let text = line(0.0, [0.0; 3], &q0) + &line(0.1, [0.0; 3], &q1);
    let gt = parse_groundtruth(Cursor::new(text)).unwrap();

    let expected = EulerDeg {
        roll: 0.0,
        pitch: 0.0,
        yaw: 10.0,
    };
    assert!((gt.euler[1].yaw - expected.yaw).abs() < 1e-9);
    assert!(gt.euler[1].roll.abs() < 1e-9);
    assert!(gt.euler[1].pitch.abs() < 1e-9);
}

#[test]
fn test_positions_are_remapped() {
    let id = na::UnitQuaternion::identity();
    let text = line(0.0, [1.0, 1.0, 1.0], &id) + &line(1.0, [3.0, 4.0, 6.0], &id);
    let gt = parse_groundtruth(Cursor::new(text)).unwrap();

    // offset (2, 3, 5) remapped to (2, -5, 3)
    let p = gt.positions[1];
    assert!((p - na::Vector3::new(2.0, -5.0, 3.0)).norm() < 1e-12);
}

#[test]
fn test_zero_timestamp_start() {
    let text = "0 0 0 0 0 0 0 1\n0.5 0 0 0 0 0 0 1\n";
    let gt = parse_groundtruth(Cursor::new(text)).unwrap();
    assert_eq!(gt.time_range.start, 0.0);
    assert_eq!(gt.time_range.end, 0.5);
}

#[test]
fn test_load_from_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("groundtruth.txt");
    std::fs::write(&path, "# header\n1 0 0 0 0 0 0 1\n2 0 2 0 0 0 0 1\n").unwrap();

    let gt = load_groundtruth(&path).unwrap();
    assert_eq!(gt.len(), 2);
    // y offset 2 lands on z after the remap
    assert!((gt.positions[1].z - 2.0).abs() < 1e-12);
}
