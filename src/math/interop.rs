//! Conversions to the math types a rendering layer works in (cgmath, glam)

use super::quaternion_data::{Matrix3, Quaternion};
use super::vector_data::Vector;

// ============================================================================
// CGMATH
// ============================================================================

impl From<Vector> for cgmath::Vector3<f32> {
    fn from(v: Vector) -> Self {
        cgmath::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<cgmath::Vector3<f32>> for Vector {
    fn from(v: cgmath::Vector3<f32>) -> Self {
        Vector {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Quaternion> for cgmath::Quaternion<f32> {
    fn from(q: Quaternion) -> Self {
        cgmath::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl From<cgmath::Quaternion<f32>> for Quaternion {
    fn from(q: cgmath::Quaternion<f32>) -> Self {
        Quaternion {
            w: q.s,
            x: q.v.x,
            y: q.v.y,
            z: q.v.z,
        }
    }
}

/// Row-major rotation matrix as a (column-major) cgmath matrix
pub fn matrix3_to_cgmath(m: &Matrix3) -> cgmath::Matrix3<f32> {
    cgmath::Matrix3::new(
        m[0][0], m[1][0], m[2][0], // column 0
        m[0][1], m[1][1], m[2][1], // column 1
        m[0][2], m[1][2], m[2][2], // column 2
    )
}

// ============================================================================
// GLAM
// ============================================================================

impl From<Vector> for glam::Vec3 {
    fn from(v: Vector) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vector {
    fn from(v: glam::Vec3) -> Self {
        Vector {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<glam::Quat> for Quaternion {
    fn from(q: glam::Quat) -> Self {
        let [x, y, z, w] = q.to_array();
        Quaternion { w, x, y, z }
    }
}
