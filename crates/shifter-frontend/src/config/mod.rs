//! Application configuration module
//!
//! Sizes, colors, default extrusion depth and pointer button mapping. Values
//! default to the look of the original tool and can be overridden by a RON
//! file in the user's configuration directory.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use serde::{Deserialize, Serialize};
use shifter_cad::DEFAULT_EXTRUDE_DEPTH;

/// Sketching preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SketchConfig {
    /// Diameter of the sphere shown for each clicked point
    pub marker_diameter: f32,
    /// Height of the flat polygon preview above the ground
    pub polygon_lift: f32,
    /// Polygon preview color (RGBA, emissive)
    pub polygon_color: [f32; 4],
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            marker_diameter: 0.15,
            polygon_lift: 0.01,
            polygon_color: [0.0, 1.0, 0.0, 1.0],
        }
    }
}

/// Extrusion preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtrudeConfig {
    /// Prism height, also the height the solid is raised to
    pub depth: f32,
    /// Solid color (RGBA)
    pub color: [f32; 4],
}

impl Default for ExtrudeConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_EXTRUDE_DEPTH,
            color: [0.0, 0.0, 1.0, 1.0],
        }
    }
}

/// Vertex editing preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditConfig {
    /// Diameter of vertex handle spheres
    pub handle_diameter: f32,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            handle_diameter: 0.25,
        }
    }
}

/// Pointer button mapping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Button that adds points and picks targets
    pub primary_button: u16,
    /// Button that closes a sketch
    pub secondary_button: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            primary_button: 0,
            secondary_button: 2,
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Background of a button whose mode is on
    pub active_color: String,
    /// Background of a button whose mode is off
    pub inactive_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            active_color: "#041b8f".to_string(),
            inactive_color: "#002aff".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub sketch: SketchConfig,
    #[serde(default)]
    pub extrude: ExtrudeConfig,
    #[serde(default)]
    pub edit: EditConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}
