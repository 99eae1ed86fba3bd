//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Camera settings.
    pub camera: CameraConfig,
    /// Globe mesh and interaction settings.
    pub globe: GlobeConfig,
    /// Age slider settings.
    pub timeline: TimelineConfig,
    /// Outline generator settings.
    pub drift: DriftConfig,
    /// Colours and lights.
    pub style: StyleConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Enable vsync.
    pub vsync: bool,
    /// Window title.
    pub title: String,
}

/// Perspective camera looking at the globe from +Z.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Distance from the globe centre.
    pub distance: f32,
}

/// Globe mesh and interaction configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Sphere radius in world units.
    pub radius: f64,
    /// Longitudinal mesh segments.
    pub width_segments: u32,
    /// Latitudinal mesh segments.
    pub height_segments: u32,
    /// Outline radius as a multiple of `radius`.
    pub outline_lift: f64,
    /// Automatic rotation about the vertical axis, radians per frame.
    pub spin_per_frame: f32,
    /// Drag rotation, radians per pixel of pointer movement.
    pub drag_sensitivity: f32,
}

/// Age slider configuration. Ages are whole Ma.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimelineConfig {
    /// Youngest selectable age.
    pub min_age_ma: u32,
    /// Oldest selectable age.
    pub max_age_ma: u32,
    /// Age shown at startup.
    pub initial_age_ma: u32,
    /// Slider increment.
    pub step_ma: u32,
}

/// Outline generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DriftConfig {
    /// Ages at or above this draw the supercontinent.
    pub threshold_ma: f64,
    /// Age at which modern anchors reach their full drift offset.
    pub max_drift_age_ma: f64,
}

/// Colours (`0xRRGGBB`) and light setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    /// Framebuffer clear colour.
    pub clear_color: u32,
    /// Globe diffuse colour.
    pub globe_color: u32,
    /// Globe emissive colour.
    pub globe_emissive: u32,
    /// Globe specular colour.
    pub globe_specular: u32,
    /// Globe specular exponent.
    pub globe_shininess: f32,
    /// Coastline line colour.
    pub outline_color: u32,
    /// Ambient light colour.
    pub ambient_color: u32,
    /// Ambient light intensity.
    pub ambient_intensity: f32,
    /// Directional light colour.
    pub sun_color: u32,
    /// Directional light intensity.
    pub sun_intensity: f32,
    /// Directional light position; it shines toward the origin.
    pub sun_position: [f32; 3],
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,tellus_scene=trace").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            vsync: true,
            title: "Tellus".to_string(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 45.0,
            near: 0.1,
            far: 1000.0,
            distance: 5.0,
        }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            width_segments: 64,
            height_segments: 64,
            outline_lift: 1.01,
            spin_per_frame: 0.002,
            drag_sensitivity: 0.01,
        }
    }
}

impl GlobeConfig {
    /// Radius the coastline outline is projected onto.
    pub fn outline_radius(&self) -> f64 {
        self.radius * self.outline_lift
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            min_age_ma: 0,
            max_age_ma: 540,
            initial_age_ma: 0,
            step_ma: 1,
        }
    }
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            threshold_ma: 180.0,
            max_drift_age_ma: 540.0,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            clear_color: 0x000011,
            globe_color: 0x6b93d6,
            globe_emissive: 0x112244,
            globe_specular: 0xffffff,
            globe_shininess: 100.0,
            outline_color: 0x228b22,
            ambient_color: 0x404040,
            ambient_intensity: 0.6,
            sun_color: 0xffffff,
            sun_intensity: 1.0,
            sun_position: [5.0, 3.0, 5.0],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Per-user config directory (`<platform config dir>/tellus`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("tellus"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
