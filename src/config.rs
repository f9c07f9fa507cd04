//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ISOBOX_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use isobox_core::{BoxSpec, BoxStyle, Color};
use isobox_math::Vec3;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Viewport configuration
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Box geometry configuration
    #[serde(default)]
    pub cuboid: CuboidConfig,
    /// Fill and outline style configuration
    #[serde(default)]
    pub style: StyleConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ISOBOX_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // ISOBOX_VIEWPORT__WIDTH=400 -> viewport.width = 400
        figment = figment.merge(Env::prefixed("ISOBOX_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Build the drawing spec described by this configuration
    pub fn to_box_spec(&self) -> BoxSpec {
        BoxSpec::new()
            .with_origin(Vec3::from(self.cuboid.origin))
            .with_extents(Vec3::from(self.cuboid.extents))
            .with_angle_degrees(self.cuboid.angle_degrees)
            .with_scale(self.viewport.scale)
            .with_style(BoxStyle {
                top_color: Color::from(self.style.top_color),
                side_color: Color::from(self.style.side_color),
                outline_color: Color::from(self.style.outline_color),
                outline_width: self.style.outline_width,
                top_corner_radius: self.style.top_corner_radius,
            })
    }
}

/// Viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Scene-unit to pixel scale
    pub scale: f32,
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Output PNG path
    pub output: String,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            scale: 40.0,
            background_color: [1.0, 1.0, 1.0, 1.0],
            output: "isobox.png".to_string(),
        }
    }
}

/// Box geometry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuboidConfig {
    /// Box origin [x, y, z] in scene units
    pub origin: [f32; 3],
    /// Box extents [width, depth, height]
    pub extents: [f32; 3],
    /// Projection angle in degrees
    pub angle_degrees: f32,
}

impl Default for CuboidConfig {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0, 0.0],
            extents: [3.0, 3.0, 2.0],
            angle_degrees: 30.0,
        }
    }
}

/// Fill and outline style configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Top face fill color [r, g, b, a]
    pub top_color: [f32; 4],
    /// Flat face fill color [r, g, b, a]
    pub side_color: [f32; 4],
    /// Outline stroke color [r, g, b, a]
    pub outline_color: [f32; 4],
    /// Outline stroke width in pixels; zero or negative disables stroking
    pub outline_width: f32,
    /// Top face corner radius in pixels
    pub top_corner_radius: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            top_color: [0.5, 0.5, 0.5, 1.0],
            side_color: [0.0, 0.0, 0.0, 1.0],
            outline_color: [0.0, 0.0, 0.0, 1.0],
            outline_width: 0.0,
            top_corner_radius: 6.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
