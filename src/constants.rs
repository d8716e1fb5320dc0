//! Numeric constants shared by the math and camera modules

/// Squared-magnitude deviation from 1 beyond which a quaternion is renormalized
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Lengths at or below this are treated as zero
pub const LENGTH_EPSILON: f32 = 1e-8;

/// Two unit directions whose dot product is below this are treated as opposite
pub const ANTIPARALLEL_DOT: f32 = -1.0 + 1e-6;

/// Canonical axes
pub mod axes {
    /// Direction a camera with identity orientation looks along
    pub const FORWARD: [f32; 3] = [0.0, 0.0, -1.0];
}
