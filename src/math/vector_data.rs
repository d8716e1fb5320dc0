//! Vector data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in vector_operations.rs

use serde::{Deserialize, Serialize};

/// Three-component vector - pure data, copied by value
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 3]> for Vector {
    fn from(v: [f32; 3]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }
}

impl From<Vector> for [f32; 3] {
    fn from(v: Vector) -> Self {
        [v.x, v.y, v.z]
    }
}
