#![cfg(feature = "serde")]

use rotations::{Degrees, Quaternion, Rotation, Vector3D};

#[test]
fn vector_survives_ron_round_trip() {
    let vector: Vector3D = Vector3D::new(1.5, -2.25, 3.0);
    let text = ron::to_string(&vector).unwrap();
    assert_eq!(ron::from_str::<Vector3D>(&text).unwrap(), vector);
}

#[test]
fn quaternion_survives_ron_round_trip() {
    let quaternion: Quaternion = Quaternion::new(0.5, -1.0, 2.0, -4.0);
    let text = ron::to_string(&quaternion).unwrap();
    assert_eq!(ron::from_str::<Quaternion>(&text).unwrap(), quaternion);
}

#[test]
fn rotation_survives_ron_round_trip() {
    let rotation: Rotation = Rotation::from_axis_angle(&Vector3D::new(1.0, 2.0, 2.0), Degrees(30.0));
    let text = ron::to_string(&rotation).unwrap();
    assert_eq!(ron::from_str::<Rotation>(&text).unwrap(), rotation);
}

#[test]
fn angle_survives_ron_round_trip() {
    let angle = Degrees(45.0_f64);
    let text = ron::to_string(&angle).unwrap();
    assert_eq!(ron::from_str::<Degrees<f64>>(&text).unwrap(), angle);
}
