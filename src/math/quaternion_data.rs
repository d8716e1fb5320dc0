//! Quaternion data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in quaternion_operations.rs

use serde::{Deserialize, Serialize};

/// Quaternion w + xi + yj + zk.
///
/// Used as a rotation it should have unit length; the raw constructor does not
/// enforce that, every other constructor does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Euler angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about the Y axis
    pub pitch: f32,

    /// Rotation about the X axis
    pub roll: f32,

    /// Rotation about the Z axis
    pub yaw: f32,
}

/// 3x3 rotation matrix, row-major: `m[row][col]`
pub type Matrix3 = [[f32; 3]; 3];

impl Default for Quaternion {
    fn default() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}
