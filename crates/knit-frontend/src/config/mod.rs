//! Application configuration module
//!
//! Editor preferences and UI settings, persisted as RON in the OS config
//! directory. Domain data is deliberately not persisted.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use knit_chart::EdgeKind;
use serde::{Deserialize, Serialize};

/// Chart editor preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Draw the background grid on the chart canvas
    pub show_grid: bool,
    /// Show "n: (x, y)" labels next to points
    pub show_point_labels: bool,
    /// Kind given to auto-created edges
    pub default_edge_kind: EdgeKind,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_point_labels: true,
            default_edge_kind: EdgeKind::Straight,
        }
    }
}

/// UI theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UiTheme {
    #[default]
    Light,
    Dark,
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub theme: UiTheme,
    /// Zoom factor applied to the whole UI
    pub zoom: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: UiTheme::Light,
            zoom: 1.0,
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
    pub editor: EditorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}
