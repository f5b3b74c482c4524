use std::path::PathBuf;

use lingrad_engine::coords::Vec2;
use lingrad_engine::device::GpuInit;
use lingrad_engine::logging::LoggingConfig;
use lingrad_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Environment variable naming a directory whose `*.wgsl` files override the
/// embedded shader resources.
pub const SHADER_DIR_ENV: &str = "LINGRAD_SHADER_DIR";

/// Squared hit radii in logical pixels. A point is hit when its squared
/// distance to the pointer is strictly below the threshold.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HitRadii {
    /// Stop markers, ~10px.
    pub stop_sq: f32,
    /// Axis end points, ~8px.
    pub endpoint_sq: f32,
}

impl Default for HitRadii {
    fn default() -> Self {
        Self {
            stop_sq: 101.0,
            endpoint_sq: 65.0,
        }
    }
}

/// Editor configuration. Everything has a usable default; there are no flags.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub logging: LoggingConfig,
    pub hit: HitRadii,
    pub shader_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig {
                title: "lingrad".to_string(),
                initial_size: LogicalSize::new(800.0, 600.0),
            },
            // Stop colors are authored as display values; keep them unconverted.
            gpu: GpuInit {
                prefer_srgb: false,
                ..GpuInit::default()
            },
            logging: LoggingConfig::default(),
            hit: HitRadii::default(),
            shader_dir: None,
        }
    }
}

impl EditorConfig {
    /// Default configuration with overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Default configuration with overrides from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let shader_dir = lookup(SHADER_DIR_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            shader_dir,
            ..Self::default()
        }
    }

    /// Initial window size as a logical-pixel vector.
    pub fn initial_window_size(&self) -> Vec2 {
        let size = self.runtime.initial_size;
        Vec2::new(size.width as f32, size.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_editor_window() {
        let config = EditorConfig::default();
        assert_eq!(config.runtime.title, "lingrad");
        assert_eq!(config.initial_window_size(), Vec2::new(800.0, 600.0));
        assert_eq!(config.hit, HitRadii { stop_sq: 101.0, endpoint_sq: 65.0 });
        assert!(config.shader_dir.is_none());
    }

    #[test]
    fn shader_dir_comes_from_lookup() {
        let config = EditorConfig::from_lookup(|key| {
            (key == SHADER_DIR_ENV).then(|| "/tmp/shaders".to_string())
        });
        assert_eq!(config.shader_dir, Some(PathBuf::from("/tmp/shaders")));
    }

    #[test]
    fn blank_shader_dir_is_ignored() {
        let config = EditorConfig::from_lookup(|_| Some("  ".to_string()));
        assert!(config.shader_dir.is_none());
    }
}
