//! Colours, material and lights, resolved from [`StyleConfig`].

use glam::Vec3;
use tellus_config::StyleConfig;

/// Split `0xRRGGBB` into `[r, g, b]` components in `[0, 1]`.
///
/// Bits above the low 24 are ignored.
pub fn color_from_hex(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// Phong-style surface material for the globe body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeMaterial {
    /// Diffuse colour.
    pub color: [f32; 3],
    /// Self-illumination colour.
    pub emissive: [f32; 3],
    /// Specular highlight colour.
    pub specular: [f32; 3],
    /// Specular exponent.
    pub shininess: f32,
}

/// Uniform light from every direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    /// Light colour.
    pub color: [f32; 3],
    /// Intensity multiplier.
    pub intensity: f32,
}

/// A light at `position` shining toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Light colour.
    pub color: [f32; 3],
    /// Intensity multiplier.
    pub intensity: f32,
    /// World-space position.
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit direction the light travels (position toward origin).
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

/// Everything a backend needs to shade the globe and its coastline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    /// Background colour.
    pub clear_color: [f32; 3],
    /// Globe body material.
    pub globe: GlobeMaterial,
    /// Coastline line colour.
    pub outline_color: [f32; 3],
    /// Ambient fill.
    pub ambient: AmbientLight,
    /// Key light.
    pub sun: DirectionalLight,
}

impl SceneStyle {
    /// Resolve hex colours and light settings from config.
    pub fn from_config(config: &StyleConfig) -> Self {
        Self {
            clear_color: color_from_hex(config.clear_color),
            globe: GlobeMaterial {
                color: color_from_hex(config.globe_color),
                emissive: color_from_hex(config.globe_emissive),
                specular: color_from_hex(config.globe_specular),
                shininess: config.globe_shininess,
            },
            outline_color: color_from_hex(config.outline_color),
            ambient: AmbientLight {
                color: color_from_hex(config.ambient_color),
                intensity: config.ambient_intensity,
            },
            sun: DirectionalLight {
                color: color_from_hex(config.sun_color),
                intensity: config.sun_intensity,
                position: Vec3::from_array(config.sun_position),
            },
        }
    }
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}
