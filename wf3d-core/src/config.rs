/// Startup configuration
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Renderer settings loaded at startup
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// fps = 30
/// camera_position = [0.5, 1.2, -6.0]
/// h_fov_degrees = 75.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Viewport width; 0 means "fit the output surface"
    pub width: u32,
    /// Viewport height; 0 means "fit the output surface"
    pub height: u32,
    pub fps: u32,
    pub camera_position: [f32; 3],
    pub h_fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub moving_speed: f32,
    pub rotation_speed_degrees: f32,
    pub draw_vertices: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            fps: 60,
            camera_position: [-5.0, 6.0, -55.0],
            h_fov_degrees: 60.0,
            near: 0.1,
            far: 100.0,
            moving_speed: 0.3,
            rotation_speed_degrees: 0.9,
            draw_vertices: true,
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject lens settings that would give a non-finite projection
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (near, far) = (self.near, self.far);
        if !(near > 0.0 && far > near) {
            return Err(ConfigError::ClipPlanes { near, far });
        }
        if !(self.h_fov_degrees > 0.0 && self.h_fov_degrees < 180.0) {
            return Err(ConfigError::FieldOfView(self.h_fov_degrees));
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = RenderConfig::from_toml_str(
            "fps = 30\ncamera_position = [0.5, 1.2, -6.0]\n",
        )
        .unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.camera_position, [0.5, 1.2, -6.0]);
        assert_eq!(config.h_fov_degrees, 60.0);
        assert!(config.draw_vertices);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(RenderConfig::from_toml_str("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_invalid_value() {
        let err = RenderConfig::from_toml_str("fps = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_rejects_bad_clip_planes() {
        let err = RenderConfig::from_toml_str("near = 5.0\nfar = 5.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ClipPlanes { near, far } if near == 5.0 && far == 5.0));

        let err = RenderConfig::from_toml_str("near = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::ClipPlanes { .. }));

        let err = RenderConfig::from_toml_str("near = 10.0\nfar = 1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ClipPlanes { .. }));

        assert!(RenderConfig::from_toml_str("near = 1.0\nfar = 50.0\n").is_ok());
    }

    #[test]
    fn test_rejects_bad_field_of_view() {
        let err = RenderConfig::from_toml_str("h_fov_degrees = 180.0").unwrap_err();
        assert!(matches!(err, ConfigError::FieldOfView(_)));
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = RenderConfig::load("/no/such/wf3d.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
