//! Quaternion operations - Pure DOP functions
//!
//! Construction (raw, axis-angle, Euler degrees, rotation matrix), composition,
//! vector rotation and the conversions back to matrix / axis-angle / Euler form.
//!
//! Composition order follows the usual convention: `a * b` applies `b` first,
//! then `a`.

use super::quaternion_data::{EulerAngles, Matrix3, Quaternion};
use super::vector_data::Vector;
use super::vector_operations::{
    vector, vector_any_perpendicular, vector_cross, vector_dot, vector_is_finite,
    vector_magnitude, vector_normalized, vector_normalized_or_zero,
};
use crate::constants::{ANTIPARALLEL_DOT, LENGTH_EPSILON, NORMALIZE_EPSILON};
use crate::error::{zero_length, OrientError, OrientResult};
use std::ops::{Mul, Neg};

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Build a quaternion from raw components. No normalization is applied.
pub const fn quaternion(w: f32, x: f32, y: f32, z: f32) -> Quaternion {
    Quaternion { w, x, y, z }
}

pub const fn quaternion_identity() -> Quaternion {
    Quaternion {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    }
}

/// Build a rotation of `angle` radians about `axis`.
///
/// The axis is divided by its own length, so it need not be unit length,
/// but it must not be zero.
pub fn quaternion_from_axis_angle(axis: &Vector, angle: f32) -> OrientResult<Quaternion> {
    if !vector_is_finite(axis) || !angle.is_finite() {
        return Err(OrientError::NonFinite {
            context: "quaternion_from_axis_angle".to_string(),
        });
    }

    let mag = vector_magnitude(axis);
    if mag <= LENGTH_EPSILON {
        return Err(zero_length("quaternion_from_axis_angle"));
    }

    let (sin_half, cos_half) = (angle * 0.5).sin_cos();
    Ok(Quaternion {
        w: cos_half,
        x: axis.x / mag * sin_half,
        y: axis.y / mag * sin_half,
        z: axis.z / mag * sin_half,
    })
}

/// Build a rotation from Euler angles in degrees.
///
/// Roll turns about X, pitch about Y and yaw about Z; the result is
/// `yaw * pitch * roll`, so roll is applied first.
pub fn quaternion_from_euler_degrees(
    pitch: f32,
    roll: f32,
    yaw: f32,
) -> OrientResult<Quaternion> {
    if !(pitch.is_finite() && roll.is_finite() && yaw.is_finite()) {
        return Err(OrientError::NonFinite {
            context: "quaternion_from_euler_degrees".to_string(),
        });
    }

    let (sinp, cosp) = (pitch.to_radians() * 0.5).sin_cos();
    let (sinr, cosr) = (roll.to_radians() * 0.5).sin_cos();
    let (siny, cosy) = (yaw.to_radians() * 0.5).sin_cos();

    let q = Quaternion {
        w: cosr * cosp * cosy + sinr * sinp * siny,
        x: sinr * cosp * cosy - cosr * sinp * siny,
        y: cosr * sinp * cosy + sinr * cosp * siny,
        z: cosr * cosp * siny - sinr * sinp * cosy,
    };

    Ok(quaternion_renormalized(&q))
}

/// Extract the rotation from a row-major `dimension x dimension` matrix.
///
/// Only 3x3 matrices are supported; any other dimension fails with
/// [`OrientError::InvalidDimension`] and no quaternion is produced.
pub fn quaternion_from_matrix(matrix: &[f32], dimension: usize) -> OrientResult<Quaternion> {
    if dimension != 3 {
        log::warn!("[Orient] Invalid matrix dimension {}", dimension);
        return Err(OrientError::InvalidDimension { dimension });
    }

    let expected = dimension * dimension;
    if matrix.len() != expected {
        return Err(OrientError::MatrixLength {
            expected,
            found: matrix.len(),
        });
    }

    let rows = [
        [matrix[0], matrix[1], matrix[2]],
        [matrix[3], matrix[4], matrix[5]],
        [matrix[6], matrix[7], matrix[8]],
    ];
    quaternion_from_matrix3(&rows)
}

/// Extract the rotation from a 3x3 row-major rotation matrix.
///
/// Each component's magnitude comes from the diagonal; its sign comes from
/// the off-diagonal terms, measured against whichever component is largest
/// so that half turns (w near 0) keep consistent signs.
pub fn quaternion_from_matrix3(m: &Matrix3) -> OrientResult<Quaternion> {
    if m.iter().flatten().any(|v| !v.is_finite()) {
        return Err(OrientError::NonFinite {
            context: "quaternion_from_matrix".to_string(),
        });
    }

    let (m00, m11, m22) = (m[0][0], m[1][1], m[2][2]);

    let w = component_magnitude(1.0 + m00 + m11 + m22);
    let x = component_magnitude(1.0 + m00 - m11 - m22);
    let y = component_magnitude(1.0 - m00 + m11 - m22);
    let z = component_magnitude(1.0 - m00 - m11 + m22);

    // m21 - m12 = 4wx, m02 - m20 = 4wy, m10 - m01 = 4wz
    // m01 + m10 = 4xy, m02 + m20 = 4xz, m12 + m21 = 4yz
    let q = if w >= x && w >= y && w >= z {
        Quaternion {
            w,
            x: x.copysign(m[2][1] - m[1][2]),
            y: y.copysign(m[0][2] - m[2][0]),
            z: z.copysign(m[1][0] - m[0][1]),
        }
    } else if x >= y && x >= z {
        Quaternion {
            w: w.copysign(m[2][1] - m[1][2]),
            x,
            y: y.copysign(m[0][1] + m[1][0]),
            z: z.copysign(m[0][2] + m[2][0]),
        }
    } else if y >= z {
        Quaternion {
            w: w.copysign(m[0][2] - m[2][0]),
            x: x.copysign(m[0][1] + m[1][0]),
            y,
            z: z.copysign(m[1][2] + m[2][1]),
        }
    } else {
        Quaternion {
            w: w.copysign(m[1][0] - m[0][1]),
            x: x.copysign(m[0][2] + m[2][0]),
            y: y.copysign(m[1][2] + m[2][1]),
            z,
        }
    };

    Ok(quaternion_renormalized(&q))
}

fn component_magnitude(t: f32) -> f32 {
    t.max(0.0).sqrt() * 0.5
}

/// Shortest-arc rotation taking direction `from` onto direction `to`.
///
/// Opposite directions rotate half a turn about an arbitrary perpendicular axis.
pub fn quaternion_between_vectors(from: &Vector, to: &Vector) -> OrientResult<Quaternion> {
    let a = vector_normalized(from)?;
    let b = vector_normalized(to)?;
    let d = vector_dot(&a, &b);

    if d < ANTIPARALLEL_DOT {
        let axis = vector_any_perpendicular(&a);
        return Ok(Quaternion {
            w: 0.0,
            x: axis.x,
            y: axis.y,
            z: axis.z,
        });
    }

    // (1 + cos t, sin t * n) is proportional to (cos t/2, sin t/2 * n)
    let c = vector_cross(&a, &b);
    let mut q = Quaternion {
        w: 1.0 + d,
        x: c.x,
        y: c.y,
        z: c.z,
    };
    quaternion_normalize(&mut q)?;
    Ok(q)
}

// ============================================================================
// ALGEBRA
// ============================================================================

/// Hamilton product `a * b`: rotation `b` followed by rotation `a`.
///
/// For a = (w1, v1), b = (w2, v2):
/// w = w1*w2 - v1.v2, v = w1*v2 + w2*v1 + v1 x v2
pub fn quaternion_mul(a: &Quaternion, b: &Quaternion) -> Quaternion {
    Quaternion {
        w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        y: a.w * b.y + a.y * b.w + a.z * b.x - a.x * b.z,
        z: a.w * b.z + a.z * b.w + a.x * b.y - a.y * b.x,
    }
}

pub fn quaternion_conjugate(q: &Quaternion) -> Quaternion {
    Quaternion {
        w: q.w,
        x: -q.x,
        y: -q.y,
        z: -q.z,
    }
}

/// Multiplicative inverse; equals the conjugate for unit quaternions
pub fn quaternion_inverse(q: &Quaternion) -> OrientResult<Quaternion> {
    let mag_sq = quaternion_magnitude_squared(q);
    if !mag_sq.is_finite() || mag_sq <= LENGTH_EPSILON * LENGTH_EPSILON {
        return Err(zero_length("quaternion_inverse"));
    }
    let c = quaternion_conjugate(q);
    Ok(Quaternion {
        w: c.w / mag_sq,
        x: c.x / mag_sq,
        y: c.y / mag_sq,
        z: c.z / mag_sq,
    })
}

pub fn quaternion_dot(a: &Quaternion, b: &Quaternion) -> f32 {
    a.w * b.w + a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn quaternion_magnitude_squared(q: &Quaternion) -> f32 {
    quaternion_dot(q, q)
}

pub fn quaternion_magnitude(q: &Quaternion) -> f32 {
    quaternion_magnitude_squared(q).sqrt()
}

pub fn quaternion_is_finite(q: &Quaternion) -> bool {
    q.w.is_finite() && q.x.is_finite() && q.y.is_finite() && q.z.is_finite()
}

/// Rescale `q` to unit length in place when it has drifted from 1
pub fn quaternion_normalize(q: &mut Quaternion) -> OrientResult<()> {
    let mag_sq = quaternion_magnitude_squared(q);
    if !mag_sq.is_finite() || mag_sq <= LENGTH_EPSILON * LENGTH_EPSILON {
        return Err(zero_length("quaternion_normalize"));
    }
    *q = quaternion_renormalized(q);
    Ok(())
}

pub fn quaternion_normalized(q: &Quaternion) -> OrientResult<Quaternion> {
    let mut unit = *q;
    quaternion_normalize(&mut unit)?;
    Ok(unit)
}

/// Renormalize when |q|^2 deviates from 1 by more than `NORMALIZE_EPSILON`.
/// Degenerate input is returned unchanged.
fn quaternion_renormalized(q: &Quaternion) -> Quaternion {
    let mag_sq = quaternion_magnitude_squared(q);
    if (mag_sq - 1.0).abs() <= NORMALIZE_EPSILON
        || !mag_sq.is_finite()
        || mag_sq <= LENGTH_EPSILON * LENGTH_EPSILON
    {
        return *q;
    }
    let mag = mag_sq.sqrt();
    Quaternion {
        w: q.w / mag,
        x: q.x / mag,
        y: q.y / mag,
        z: q.z / mag,
    }
}

/// True when `a` and `b` describe the same rotation (q and -q are equivalent)
pub fn quaternion_approx_eq_rotation(a: &Quaternion, b: &Quaternion, tolerance: f32) -> bool {
    let same = (a.w - b.w).abs() <= tolerance
        && (a.x - b.x).abs() <= tolerance
        && (a.y - b.y).abs() <= tolerance
        && (a.z - b.z).abs() <= tolerance;
    let flipped = (a.w + b.w).abs() <= tolerance
        && (a.x + b.x).abs() <= tolerance
        && (a.y + b.y).abs() <= tolerance
        && (a.z + b.z).abs() <= tolerance;
    same || flipped
}

// ============================================================================
// VECTOR ROTATION
// ============================================================================

/// Rotate the direction of `v` by `q`.
///
/// The input is normalized first, so the result is a unit vector (or the
/// zero vector when `v` has no direction). Use [`quaternion_transform_vector`]
/// to keep the original length.
pub fn quaternion_rotate_vector(q: &Quaternion, v: &Vector) -> Vector {
    quaternion_transform_vector(q, &vector_normalized_or_zero(v))
}

/// Rotate `v` by unit quaternion `q`, preserving its length.
///
/// Reduced form of q * (0, v) * conj(q): with u = (x, y, z) and t = 2(u x v),
/// v' = v + w*t + u x t.
pub fn quaternion_transform_vector(q: &Quaternion, v: &Vector) -> Vector {
    let u = vector(q.x, q.y, q.z);
    let c = vector_cross(&u, v);
    let t = vector(2.0 * c.x, 2.0 * c.y, 2.0 * c.z);
    let ut = vector_cross(&u, &t);

    Vector {
        x: v.x + q.w * t.x + ut.x,
        y: v.y + q.w * t.y + ut.y,
        z: v.z + q.w * t.z + ut.z,
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Row-major 3x3 rotation matrix of unit quaternion `q`
pub fn quaternion_to_matrix(q: &Quaternion) -> Matrix3 {
    let (w, x, y, z) = (q.w, q.x, q.y, q.z);
    [
        [
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y - w * z),
            2.0 * (x * z + w * y),
        ],
        [
            2.0 * (x * y + w * z),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z - w * x),
        ],
        [
            2.0 * (x * z - w * y),
            2.0 * (y * z + w * x),
            1.0 - 2.0 * (x * x + y * y),
        ],
    ]
}

/// Write the rotation matrix of `q` into `out`, row-major.
///
/// Mirrors [`quaternion_from_matrix`]: only dimension 3 is supported.
pub fn quaternion_write_matrix(
    q: &Quaternion,
    out: &mut [f32],
    dimension: usize,
) -> OrientResult<()> {
    if dimension != 3 {
        return Err(OrientError::InvalidDimension { dimension });
    }
    if out.len() != dimension * dimension {
        return Err(OrientError::MatrixLength {
            expected: dimension * dimension,
            found: out.len(),
        });
    }

    let m = quaternion_to_matrix(q);
    for (row, values) in m.iter().enumerate() {
        out[row * 3..row * 3 + 3].copy_from_slice(values);
    }
    Ok(())
}

/// Axis and angle (radians, in [0, 2pi]) of the rotation `q`.
///
/// The angle comes from atan2 of the vector part's length against w, which
/// stays accurate for small rotations where acos(w) loses precision.
/// A rotation by zero has no defined axis; the X axis is reported.
pub fn quaternion_to_vector_angle(q: &Quaternion) -> (Vector, f32) {
    let unit = quaternion_normalized(q).unwrap_or_else(|_| quaternion_identity());

    let s = (unit.x * unit.x + unit.y * unit.y + unit.z * unit.z).sqrt();
    let angle = 2.0 * s.atan2(unit.w);

    if s <= LENGTH_EPSILON {
        return (vector(1.0, 0.0, 0.0), angle);
    }

    (vector(unit.x / s, unit.y / s, unit.z / s), angle)
}

/// Euler angles in degrees, inverse of [`quaternion_from_euler_degrees`].
///
/// Pitch is clamped to +/-90 degrees; at exactly +/-90 roll and yaw are not
/// separable and their split is arbitrary.
pub fn quaternion_to_euler_angles(q: &Quaternion) -> EulerAngles {
    let (w, x, y, z) = (q.w, q.x, q.y, q.z);

    let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
    let pitch = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin();
    let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

    EulerAngles {
        pitch: pitch.to_degrees(),
        roll: roll.to_degrees(),
        yaw: yaw.to_degrees(),
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        quaternion_mul(&self, &rhs)
    }
}

impl Mul<Vector> for Quaternion {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        quaternion_rotate_vector(&self, &rhs)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion {
            w: -self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
