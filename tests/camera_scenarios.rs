//! End-to-end camera and rotation scenarios through the public API

use hearth_orient::camera::{
    camera_focus, camera_is_focused, camera_position, disable_focus, init_camera, look_at,
    move_along, move_to, orbit_about_axis, orbit_between, rotate,
};
use hearth_orient::math::{
    quaternion, quaternion_approx_eq_rotation, quaternion_from_axis_angle,
    quaternion_from_euler_degrees, quaternion_from_matrix, quaternion_to_matrix, vector,
    vector_approx_eq, vector_cross, vector_dot, vector_magnitude_squared, vector_normalized,
};
use hearth_orient::{OrientError, Quaternion, Vector};
use std::f32::consts::FRAC_PI_2;

const TOLERANCE: f32 = 1e-4;

fn unit(x: f32, y: f32, z: f32) -> Vector {
    vector_normalized(&vector(x, y, z)).expect("non-zero vector")
}

fn rotations() -> Vec<Quaternion> {
    vec![
        quaternion_from_axis_angle(&vector(0.0, 0.0, 1.0), FRAC_PI_2).expect("non-zero axis"),
        quaternion_from_axis_angle(&vector(1.0, 1.0, 1.0), 2.2).expect("non-zero axis"),
        quaternion_from_axis_angle(&vector(-1.0, 0.5, 0.0), -0.4).expect("non-zero axis"),
        quaternion_from_euler_degrees(10.0, 170.0, -35.0).expect("finite angles"),
    ]
}

#[test]
fn axis_is_fixed_under_its_own_rotation() {
    for axis in [unit(0.0, 0.0, 1.0), unit(1.0, 2.0, 3.0), unit(-4.0, 0.0, 1.0)] {
        for angle in [0.1f32, 1.0, 3.0, -2.5] {
            let q = quaternion_from_axis_angle(&axis, angle).expect("non-zero axis");
            assert!(vector_approx_eq(&(q * axis), &axis, TOLERANCE));
        }
    }
}

#[test]
fn composition_matches_sequential_application() {
    let directions = [unit(1.0, 0.0, 0.0), unit(0.3, -0.7, 0.2), unit(-1.0, -1.0, 1.0)];
    for q1 in rotations() {
        for q2 in rotations() {
            for v in directions {
                assert!(vector_approx_eq(&((q1 * q2) * v), &(q1 * (q2 * v)), TOLERANCE));
            }
        }
    }
}

#[test]
fn cross_and_dot_identities() {
    for v in [vector(1.0, 2.0, 3.0), vector(-0.5, 0.0, 8.0), vector(0.0, 0.0, 0.0)] {
        assert_eq!(vector_cross(&v, &v), vector(0.0, 0.0, 0.0));
        assert!((vector_dot(&v, &v) - vector_magnitude_squared(&v)).abs() < TOLERANCE);
    }
}

#[test]
fn quarter_turn_about_z_maps_x_to_y() {
    let q = quaternion_from_axis_angle(&vector(0.0, 0.0, 1.0), FRAC_PI_2).expect("non-zero axis");
    assert!(vector_approx_eq(&(q * vector(1.0, 0.0, 0.0)), &vector(0.0, 1.0, 0.0), TOLERANCE));
}

#[test]
fn matrix_round_trip_up_to_sign() {
    for q in rotations() {
        let m = quaternion_to_matrix(&q);
        let flat: Vec<f32> = m.iter().flatten().copied().collect();
        let back = quaternion_from_matrix(&flat, 3).expect("3x3 matrix");
        assert!(quaternion_approx_eq_rotation(&q, &back, TOLERANCE));
    }
}

#[test]
fn four_by_four_extraction_is_unsupported() {
    let identity4 = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];
    assert_eq!(
        quaternion_from_matrix(&identity4, 4),
        Err(OrientError::InvalidDimension { dimension: 4 })
    );
}

#[test]
fn camera_moves_along_direction() {
    let camera = init_camera(0.0, 0.0, 0.0);
    let camera = move_along(&camera, &vector(1.0, 0.0, 0.0), 5.0).expect("valid direction");
    assert!(vector_approx_eq(&camera_position(&camera), &vector(5.0, 0.0, 0.0), TOLERANCE));

    let camera = move_to(&camera, vector(0.0, 1.0, 0.0));
    assert_eq!(camera_position(&camera), vector(0.0, 1.0, 0.0));
}

#[test]
fn camera_focus_toggles() {
    let camera = look_at(&init_camera(0.0, 0.0, 0.0), vector(0.0, 0.0, -5.0));
    assert!(camera_is_focused(&camera));
    assert_eq!(camera_focus(&camera), vector(0.0, 0.0, -5.0));

    let camera = disable_focus(&camera, &quaternion(1.0, 0.0, 0.0, 0.0)).expect("unit rotation");
    assert!(!camera_is_focused(&camera));

    let camera = rotate(&camera, 0.0, 0.0, 30.0).expect("finite angles");
    assert!(!camera_is_focused(&camera));
}

#[test]
fn camera_orbits_around_centroid() {
    let camera = init_camera(5.0, 0.0, 0.0);
    let centroid = vector(0.0, 0.0, 0.0);
    let up = vector(0.0, 1.0, 0.0);
    let q = quaternion_from_axis_angle(&up, FRAC_PI_2).expect("non-zero axis");

    let by_axis = orbit_about_axis(&camera, &centroid, &up, &q).expect("valid orbit");
    assert!(vector_approx_eq(&camera_position(&by_axis), &vector(0.0, 0.0, -5.0), TOLERANCE));
    assert!(camera_is_focused(&by_axis));
    assert_eq!(camera_focus(&by_axis), centroid);

    let by_directions = orbit_between(
        &camera,
        &centroid,
        &vector(1.0, 0.0, 0.0),
        &vector(0.0, 0.0, -1.0),
    )
    .expect("valid orbit");
    assert!(vector_approx_eq(
        &camera_position(&by_directions),
        &camera_position(&by_axis),
        TOLERANCE
    ));
}

#[test]
fn full_orbit_returns_home() {
    let mut camera = init_camera(3.0, 1.0, -2.0);
    let centroid = vector(0.0, 1.0, 0.0);
    let up = vector(0.0, 1.0, 0.0);
    let step = quaternion_from_axis_angle(&up, 30.0f32.to_radians()).expect("non-zero axis");

    for _ in 0..12 {
        camera = orbit_about_axis(&camera, &centroid, &up, &step).expect("valid orbit");
    }
    assert!(vector_approx_eq(&camera_position(&camera), &vector(3.0, 1.0, -2.0), 1e-3));
}

#[test]
fn tiny_orbit_step_moves_along_the_arc() {
    let centroid = vector(0.0, 0.0, 0.0);
    let up = vector(0.0, 1.0, 0.0);
    let camera = init_camera(5.0, 0.0, 0.0);

    for angle in [1e-3f32, 1e-4] {
        let q = quaternion_from_axis_angle(&up, angle).expect("non-zero axis");
        let moved = orbit_about_axis(&camera, &centroid, &up, &q).expect("valid orbit");
        let position = camera_position(&moved);
        let arc = -5.0 * angle.sin();
        assert!(
            ((position.z - arc) / arc).abs() < 1e-3,
            "step of {} rad moved z to {}",
            angle,
            position.z
        );
    }
}
