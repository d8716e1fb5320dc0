/// Math Module - Data-Oriented Programming (DOP) style
///
/// - vector_data.rs / quaternion_data.rs: Pure data structures with NO methods
/// - vector_operations.rs / quaternion_operations.rs: Pure functions that operate on data
/// - interop.rs: conversions to cgmath and glam types

pub mod interop;
pub mod quaternion_data;
pub mod quaternion_operations;
pub mod vector_data;
pub mod vector_operations;

// Re-export data structures
pub use quaternion_data::{EulerAngles, Matrix3, Quaternion};
pub use vector_data::Vector;

// Re-export all operations
pub use vector_operations::{
    // Construction
    vector,
    vector_zero,

    // Magnitude
    vector_is_finite,
    vector_magnitude,
    vector_magnitude_squared,
    vector_normalize,
    vector_normalized,
    vector_normalized_or_zero,

    // Products
    vector_add,
    vector_any_perpendicular,
    vector_approx_eq,
    vector_cross,
    vector_dot,
    vector_scale,
    vector_sub,
};

pub use quaternion_operations::{
    // Construction
    quaternion,
    quaternion_between_vectors,
    quaternion_from_axis_angle,
    quaternion_from_euler_degrees,
    quaternion_from_matrix,
    quaternion_from_matrix3,
    quaternion_identity,

    // Algebra
    quaternion_approx_eq_rotation,
    quaternion_conjugate,
    quaternion_dot,
    quaternion_inverse,
    quaternion_is_finite,
    quaternion_magnitude,
    quaternion_magnitude_squared,
    quaternion_mul,
    quaternion_normalize,
    quaternion_normalized,

    // Vector rotation
    quaternion_rotate_vector,
    quaternion_transform_vector,

    // Conversions
    quaternion_to_euler_angles,
    quaternion_to_matrix,
    quaternion_to_vector_angle,
    quaternion_write_matrix,
};

pub use interop::matrix3_to_cgmath;
