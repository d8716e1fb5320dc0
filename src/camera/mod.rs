/// Camera Module - Data-Oriented Programming (DOP) style
///
/// This module follows pure DOP principles:
/// - camera_data.rs: Pure data structures with NO methods
/// - camera_operations.rs: Pure functions that operate on data
/// - camera_config.rs: TOML configuration loading
///

pub mod camera_config;
pub mod camera_data;
pub mod camera_operations;

// Re-export data structures
pub use camera_data::{CameraConfig, CameraData, CameraUniform};

// Re-export configuration
pub use camera_config::{load_camera_config, load_camera_config_file, validate_camera_config};

// Re-export all operations
pub use camera_operations::{
    // Initialization
    init_camera,
    init_camera_at,
    init_camera_from_config,

    // Orientation
    disable_focus,
    look_at,
    rotate,

    // Movement
    move_along,
    move_to,

    // Orbit
    orbit,
    orbit_about_axis,
    orbit_between,

    // Accessors
    build_camera_uniform,
    camera_focus,
    camera_is_focused,
    camera_orientation,
    camera_position,
    camera_view_direction,

    // Diagnostics
    log_camera_context,
};
