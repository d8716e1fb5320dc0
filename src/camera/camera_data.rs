//! Camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in camera_operations.rs

use crate::math::{Quaternion, Vector};
use serde::{Deserialize, Serialize};

/// Camera data structure - pure data, no methods
///
/// Exactly one of `focus` or `rotation` drives the orientation at any time,
/// selected by `focus_on`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraData {
    /// Camera position in world space
    pub position: Vector,

    /// Explicit orientation, authoritative while `focus_on` is false
    pub rotation: Quaternion,

    /// Look-at target, authoritative while `focus_on` is true
    pub focus: Vector,

    /// Whether orientation follows the focus point
    pub focus_on: bool,
}

/// Camera uniform buffer data for GPU
/// Must match shader layout exactly
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Camera position (vec3 + padding)
    pub position: [f32; 4],

    /// Orientation quaternion (x, y, z, w)
    pub orientation: [f32; 4],

    /// Focus point (vec3 + padding)
    pub focus: [f32; 4],

    /// View direction (vec3 + padding)
    pub forward: [f32; 4],

    /// 1 when orientation follows the focus point
    pub focus_on: u32,

    /// Padding to align to 16 bytes
    pub _padding: [u32; 3],
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            position: Vector::default(),
            rotation: Quaternion::default(),
            focus: Vector::default(),
            focus_on: true,
        }
    }
}

/// Camera configuration for initialization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub initial_position: [f32; 3],

    /// Look-at target; the origin when absent
    pub initial_focus: Option<[f32; 3]>,

    /// Pitch, roll, yaw in degrees
    pub initial_rotation_degrees: Option<[f32; 3]>,

    pub focus_enabled: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_position: [0.0, 0.0, 0.0],
            initial_focus: None,
            initial_rotation_degrees: None,
            focus_enabled: true,
        }
    }
}
