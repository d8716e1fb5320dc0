//! Camera operations - Pure DOP functions
//!
//! All functions are pure: they take data, return new data, no side effects.
//! No methods, no self, just transformations.

use super::camera_config::validate_camera_config;
use super::camera_data::{CameraConfig, CameraData, CameraUniform};
use crate::constants::axes;
use crate::error::{OrientError, OrientResult};
use crate::math::{
    quaternion_between_vectors, quaternion_from_axis_angle, quaternion_from_euler_degrees,
    quaternion_identity, quaternion_is_finite, quaternion_magnitude, quaternion_mul,
    quaternion_normalized, quaternion_rotate_vector, quaternion_to_vector_angle,
    quaternion_transform_vector, vector, vector_add, vector_dot, vector_is_finite,
    vector_normalized, vector_normalized_or_zero, vector_scale, vector_sub, vector_zero,
    Quaternion, Vector,
};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Camera at (x, y, z) with identity orientation, focused on the origin
pub fn init_camera(x: f32, y: f32, z: f32) -> CameraData {
    init_camera_at(vector(x, y, z))
}

pub fn init_camera_at(position: Vector) -> CameraData {
    CameraData {
        position,
        ..Default::default()
    }
}

/// Initialize camera from config
pub fn init_camera_from_config(config: &CameraConfig) -> OrientResult<CameraData> {
    validate_camera_config(config)?;

    let rotation = match config.initial_rotation_degrees {
        Some([pitch, roll, yaw]) => quaternion_from_euler_degrees(pitch, roll, yaw)?,
        None => quaternion_identity(),
    };

    Ok(CameraData {
        position: config.initial_position.into(),
        rotation,
        focus: config.initial_focus.map(Vector::from).unwrap_or_default(),
        focus_on: config.focus_enabled,
    })
}

// ============================================================================
// ORIENTATION
// ============================================================================

/// Turn the camera by Euler angles (degrees) in its local frame.
///
/// Does not change which orientation source is authoritative.
pub fn rotate(camera: &CameraData, pitch: f32, roll: f32, yaw: f32) -> OrientResult<CameraData> {
    let turn = quaternion_from_euler_degrees(pitch, roll, yaw)?;
    let mut new_camera = *camera;
    new_camera.rotation = quaternion_normalized(&quaternion_mul(&camera.rotation, &turn))?;
    Ok(new_camera)
}

/// Make `q` the authoritative orientation and stop following the focus point
pub fn disable_focus(camera: &CameraData, q: &Quaternion) -> OrientResult<CameraData> {
    if !quaternion_is_finite(q) {
        return Err(OrientError::NonFinite {
            context: "camera disable_focus".to_string(),
        });
    }

    let mut new_camera = *camera;
    new_camera.rotation = quaternion_normalized(q)?;
    new_camera.focus_on = false;

    log::debug!("[Camera] Focus disabled, explicit rotation {:?}", new_camera.rotation);
    Ok(new_camera)
}

/// Keep looking at `p` regardless of position
pub fn look_at(camera: &CameraData, p: Vector) -> CameraData {
    let mut new_camera = *camera;
    new_camera.focus = p;
    new_camera.focus_on = true;

    log::debug!("[Camera] Focus on ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
    new_camera
}

// ============================================================================
// MOVEMENT
// ============================================================================

/// Relocate the camera to `new_location`
pub fn move_to(camera: &CameraData, new_location: Vector) -> CameraData {
    let mut new_camera = *camera;
    new_camera.position = new_location;
    new_camera
}

/// Move `distance` along `dir` from the current position
pub fn move_along(camera: &CameraData, dir: &Vector, distance: f32) -> OrientResult<CameraData> {
    if !distance.is_finite() {
        return Err(OrientError::NonFinite {
            context: "camera move_along".to_string(),
        });
    }

    let step = vector_scale(&vector_normalized(dir)?, distance);
    let mut new_camera = *camera;
    new_camera.position = vector_add(&camera.position, &step);
    Ok(new_camera)
}

// ============================================================================
// ORBIT
// ============================================================================

/// Swing the camera around `centroid` by `rotation`.
///
/// The offset from the centroid is rotated (its length is kept), the explicit
/// orientation turns by the same amount, and the camera ends up focused on
/// the centroid.
pub fn orbit(
    camera: &CameraData,
    centroid: &Vector,
    rotation: &Quaternion,
) -> OrientResult<CameraData> {
    if !vector_is_finite(centroid) || !quaternion_is_finite(rotation) {
        return Err(OrientError::NonFinite {
            context: "camera orbit".to_string(),
        });
    }

    let rotation = quaternion_normalized(rotation)?;
    let offset = vector_sub(&camera.position, centroid);
    let swung = quaternion_transform_vector(&rotation, &offset);

    let mut new_camera = *camera;
    new_camera.position = vector_add(centroid, &swung);
    new_camera.rotation = quaternion_normalized(&quaternion_mul(&rotation, &camera.rotation))?;

    log::debug!(
        "[Camera] Orbit to ({:.2}, {:.2}, {:.2})",
        new_camera.position.x,
        new_camera.position.y,
        new_camera.position.z
    );
    Ok(look_at(&new_camera, *centroid))
}

/// Orbit about `axis` by the angle of `q`.
///
/// Only the angle of `q` is used; it is negated when the axis of `q` points
/// away from `axis`.
pub fn orbit_about_axis(
    camera: &CameraData,
    centroid: &Vector,
    axis: &Vector,
    q: &Quaternion,
) -> OrientResult<CameraData> {
    let (q_axis, angle) = quaternion_to_vector_angle(q);
    let angle = if vector_dot(&q_axis, axis) < 0.0 { -angle } else { angle };

    let rotation = quaternion_from_axis_angle(axis, angle)?;
    orbit(camera, centroid, &rotation)
}

/// Orbit by the rotation that takes direction `p1` onto direction `p2`
pub fn orbit_between(
    camera: &CameraData,
    centroid: &Vector,
    p1: &Vector,
    p2: &Vector,
) -> OrientResult<CameraData> {
    let rotation = quaternion_between_vectors(p1, p2)?;
    orbit(camera, centroid, &rotation)
}

// ============================================================================
// ACCESSORS
// ============================================================================

pub fn camera_position(camera: &CameraData) -> Vector {
    camera.position
}

pub fn camera_orientation(camera: &CameraData) -> Quaternion {
    camera.rotation
}

pub fn camera_focus(camera: &CameraData) -> Vector {
    camera.focus
}

pub fn camera_is_focused(camera: &CameraData) -> bool {
    camera.focus_on
}

/// Unit direction the camera looks along.
///
/// Focus-driven cameras look from the position toward the focus point; when
/// the two coincide, or focus is off, the explicit rotation applied to -Z is used.
pub fn camera_view_direction(camera: &CameraData) -> Vector {
    if camera.focus_on {
        let dir = vector_normalized_or_zero(&vector_sub(&camera.focus, &camera.position));
        if dir != vector_zero() {
            return dir;
        }
    }
    quaternion_rotate_vector(&camera.rotation, &Vector::from(axes::FORWARD))
}

/// Build camera uniform for GPU
pub fn build_camera_uniform(camera: &CameraData) -> CameraUniform {
    let forward = camera_view_direction(camera);
    let q = camera.rotation;

    CameraUniform {
        position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
        orientation: [q.x, q.y, q.z, q.w],
        focus: [camera.focus.x, camera.focus.y, camera.focus.z, 1.0],
        forward: [forward.x, forward.y, forward.z, 0.0],
        focus_on: camera.focus_on as u32,
        _padding: [0; 3],
    }
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Log camera context for debugging
pub fn log_camera_context(camera: &CameraData) {
    let forward = camera_view_direction(camera);

    log::debug!(
        "[Camera] Position: ({:.2}, {:.2}, {:.2}) | Forward: ({:.3}, {:.3}, {:.3})",
        camera.position.x,
        camera.position.y,
        camera.position.z,
        forward.x,
        forward.y,
        forward.z
    );

    log::debug!(
        "[Camera] Rotation: w={:.4} x={:.4} y={:.4} z={:.4} (|q|={:.6}) | Focus {}: ({:.2}, {:.2}, {:.2})",
        camera.rotation.w,
        camera.rotation.x,
        camera.rotation.y,
        camera.rotation.z,
        quaternion_magnitude(&camera.rotation),
        if camera.focus_on { "on" } else { "off" },
        camera.focus.x,
        camera.focus.y,
        camera.focus.z
    );
}
