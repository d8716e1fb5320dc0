//! Camera configuration loading (TOML)
//!
//! ```toml
//! initial_position = [0.0, 2.0, 10.0]
//! initial_focus = [0.0, 0.0, 0.0]
//! initial_rotation_degrees = [0.0, 0.0, 45.0]  # pitch, roll, yaw
//! focus_enabled = true
//! ```

use super::camera_data::CameraConfig;
use crate::error::{OrientError, OrientResult};
use std::path::Path;

/// Parse and validate a camera config from TOML text
pub fn load_camera_config(source: &str) -> OrientResult<CameraConfig> {
    let config: CameraConfig = toml::from_str(source)?;
    validate_camera_config(&config)?;
    Ok(config)
}

/// Read, parse and validate a camera config file
pub fn load_camera_config_file(path: impl AsRef<Path>) -> OrientResult<CameraConfig> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| OrientError::Io {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    log::debug!("[Config] Loaded camera config from {}", path.display());
    load_camera_config(&source)
}

/// Reject NaN and infinite values before they reach any rotation
pub fn validate_camera_config(config: &CameraConfig) -> OrientResult<()> {
    check_finite("initial_position", &config.initial_position)?;
    if let Some(focus) = &config.initial_focus {
        check_finite("initial_focus", focus)?;
    }
    if let Some(rotation) = &config.initial_rotation_degrees {
        check_finite("initial_rotation_degrees", rotation)?;
    }
    Ok(())
}

fn check_finite(field: &str, values: &[f32; 3]) -> OrientResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        return Ok(());
    }
    Err(OrientError::InvalidConfig {
        field: field.to_string(),
        value: format!("{:?}", values),
        reason: "values must be finite".to_string(),
    })
}
