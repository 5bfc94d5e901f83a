//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`RAGDOLL_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use ragdoll_physics::PhysicsConfig;
use ragdoll_render::{Camera2D, DebugDrawFlags};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Simulation configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
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
    /// 3. Environment variables (`RAGDOLL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // RAGDOLL_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("RAGDOLL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Ragdoll 2D".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Frame rate cap; the physics advances one 1/fps step per frame
    pub fps: u32,
    /// Constraint solver iterations per step
    pub solver_iterations: usize,
    /// Gravity [x, y] (positive y points down the screen)
    pub gravity: [f32; 2],
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            solver_iterations: 8,
            gravity: [0.0, 9.8],
        }
    }
}

impl SimulationConfig {
    /// Convert to the physics engine's configuration
    pub fn to_physics_config(&self) -> PhysicsConfig {
        PhysicsConfig::new(self.gravity)
            .with_rate(self.fps)
            .with_solver_iterations(self.solver_iterations)
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// World point at the centre of the window
    pub center: [f32; 2],
    /// Visible world width and height
    pub size: [f32; 2],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            center: [50.0, 50.0],
            size: [100.0, 100.0],
        }
    }
}

impl CameraConfig {
    pub fn to_camera(&self) -> Camera2D {
        Camera2D::new().with_center(self.center).with_size(self.size)
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Velocity applied to the controlled body per held axis (units per second)
    pub control_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            control_speed: 50.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Draw collider outlines
    pub draw_shapes: bool,
    /// Draw joints
    pub draw_joints: bool,
    /// Draw body axes
    pub draw_body_axes: bool,
    /// Draw contact points and normals
    pub draw_contacts: bool,
    /// Draw collider bounding boxes
    pub draw_aabbs: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            draw_shapes: true,
            draw_joints: true,
            draw_body_axes: true,
            draw_contacts: true,
            draw_aabbs: true,
        }
    }
}

impl RenderingConfig {
    pub fn debug_draw_flags(&self) -> DebugDrawFlags {
        DebugDrawFlags {
            shapes: self.draw_shapes,
            joints: self.draw_joints,
            body_axes: self.draw_body_axes,
            contacts: self.draw_contacts,
            aabbs: self.draw_aabbs,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
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
