// Hearth Orient - Data-Oriented Programming (DOP) Architecture
//
// Quaternion-based orientation for cameras, free of gimbal lock.
// - *_data modules hold plain value types (Vector, Quaternion, CameraData)
// - *_operations modules hold pure functions over them
//
// Data flows one direction: math::Vector -> math::Quaternion -> camera

// Constants module
pub mod constants;

// Core modules
pub mod error;

// Essential systems
pub mod camera;
pub mod math;

pub use camera::{CameraConfig, CameraData, CameraUniform};
pub use error::{OrientError, OrientResult};
pub use math::{EulerAngles, Matrix3, Quaternion, Vector};
