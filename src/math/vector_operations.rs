//! Vector operations - Pure DOP functions
//!
//! Everything here returns a new value except `vector_normalize`, which
//! rescales its argument in place.

use super::vector_data::Vector;
use crate::constants::LENGTH_EPSILON;
use crate::error::{zero_length, OrientResult};
use std::ops::{Add, Mul, Neg, Sub};

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Create a vector from components
pub const fn vector(x: f32, y: f32, z: f32) -> Vector {
    Vector { x, y, z }
}

/// The zero vector
pub const fn vector_zero() -> Vector {
    Vector {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    }
}

// ============================================================================
// MAGNITUDE
// ============================================================================

pub fn vector_magnitude_squared(v: &Vector) -> f32 {
    v.x * v.x + v.y * v.y + v.z * v.z
}

pub fn vector_magnitude(v: &Vector) -> f32 {
    vector_magnitude_squared(v).sqrt()
}

pub fn vector_is_finite(v: &Vector) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

/// Rescale `v` to unit length in place.
///
/// Zero-length and non-finite vectors are rejected and left untouched.
pub fn vector_normalize(v: &mut Vector) -> OrientResult<()> {
    let mag_sq = vector_magnitude_squared(v);
    if !mag_sq.is_finite() || mag_sq <= LENGTH_EPSILON * LENGTH_EPSILON {
        return Err(zero_length("vector_normalize"));
    }
    if mag_sq != 1.0 {
        let mag = mag_sq.sqrt();
        v.x /= mag;
        v.y /= mag;
        v.z /= mag;
    }
    Ok(())
}

/// Unit-length copy of `v`
pub fn vector_normalized(v: &Vector) -> OrientResult<Vector> {
    let mut unit = *v;
    vector_normalize(&mut unit)?;
    Ok(unit)
}

/// Unit-length copy of `v`, or the zero vector when `v` has no direction
pub fn vector_normalized_or_zero(v: &Vector) -> Vector {
    let mag = vector_magnitude(v);
    if !mag.is_finite() || mag <= LENGTH_EPSILON {
        return vector_zero();
    }
    vector_scale(v, 1.0 / mag)
}

// ============================================================================
// PRODUCTS
// ============================================================================

pub fn vector_dot(a: &Vector, b: &Vector) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product `a x b`
pub fn vector_cross(a: &Vector, b: &Vector) -> Vector {
    Vector {
        x: a.y * b.z - b.y * a.z,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - b.x * a.y,
    }
}

pub fn vector_add(a: &Vector, b: &Vector) -> Vector {
    Vector {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
}

pub fn vector_sub(a: &Vector, b: &Vector) -> Vector {
    Vector {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
}

pub fn vector_scale(v: &Vector, f: f32) -> Vector {
    Vector {
        x: f * v.x,
        y: f * v.y,
        z: f * v.z,
    }
}

/// Any unit vector perpendicular to `v` (which must be unit length)
pub fn vector_any_perpendicular(v: &Vector) -> Vector {
    // Cross with whichever basis axis is least aligned with v
    let basis = if v.x.abs() < 0.9 {
        vector(1.0, 0.0, 0.0)
    } else {
        vector(0.0, 1.0, 0.0)
    };
    vector_normalized_or_zero(&vector_cross(v, &basis))
}

/// Component-wise comparison within `tolerance`
pub fn vector_approx_eq(a: &Vector, b: &Vector, tolerance: f32) -> bool {
    (a.x - b.x).abs() <= tolerance
        && (a.y - b.y).abs() <= tolerance
        && (a.z - b.z).abs() <= tolerance
}

// ============================================================================
// OPERATORS
// ============================================================================

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        vector_add(&self, &rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        vector_sub(&self, &rhs)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        vector_scale(&self, rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        vector_scale(&self, -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrientError;

    #[test]
    fn test_normalize_in_place() {
        let mut v = vector(3.0, 0.0, 4.0);
        vector_normalize(&mut v).expect("non-zero vector should normalize");
        assert!(vector_approx_eq(&v, &vector(0.6, 0.0, 0.8), 1e-6));
        assert!((vector_magnitude(&v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector_is_rejected() {
        let mut v = vector_zero();
        let result = vector_normalize(&mut v);
        assert!(matches!(result, Err(OrientError::ZeroLength { .. })));
        assert_eq!(v, vector_zero());
        assert_eq!(vector_normalized_or_zero(&v), vector_zero());
    }

    #[test]
    fn test_normalize_nan_is_rejected() {
        let mut v = vector(f32::NAN, 1.0, 0.0);
        assert!(vector_normalize(&mut v).is_err());
    }

    #[test]
    fn test_cross_with_self_is_zero() {
        let v = vector(1.5, -2.0, 7.25);
        assert_eq!(vector_cross(&v, &v), vector_zero());
    }

    #[test]
    fn test_dot_with_self_is_squared_magnitude() {
        let v = vector(1.5, -2.0, 7.25);
        assert!((vector_dot(&v, &v) - vector_magnitude_squared(&v)).abs() < 1e-5);
    }

    #[test]
    fn test_cross_is_right_handed() {
        let x = vector(1.0, 0.0, 0.0);
        let y = vector(0.0, 1.0, 0.0);
        assert_eq!(vector_cross(&x, &y), vector(0.0, 0.0, 1.0));
        assert_eq!(vector_cross(&y, &x), vector(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_operators() {
        let a = vector(1.0, 2.0, 3.0);
        let b = vector(-1.0, 0.5, 2.0);
        assert_eq!(a + b, vector(0.0, 2.5, 5.0));
        assert_eq!(a - b, vector(2.0, 1.5, 1.0));
        assert_eq!(a * 2.0, vector(2.0, 4.0, 6.0));
        assert_eq!(-a, vector(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_any_perpendicular() {
        for v in [
            vector(1.0, 0.0, 0.0),
            vector(0.0, 1.0, 0.0),
            vector(0.0, 0.0, -1.0),
        ] {
            let p = vector_any_perpendicular(&v);
            assert!(vector_dot(&v, &p).abs() < 1e-6);
            assert!((vector_magnitude(&p) - 1.0).abs() < 1e-6);
        }
    }
}
