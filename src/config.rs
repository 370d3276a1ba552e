// Configuration management
//
// Handles video presentation settings and their persistence as TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

use crate::filters::FilterKind;
use crate::video::ScreenLayout;

/// Default configuration file path
const CONFIG_FILE: &str = "video_config.toml";

/// Video presentation configuration
///
/// Stores all user-configurable settings for the presentation pipeline.
/// Apply to a pipeline with [`crate::video::VideoPipeline::apply_config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Upscaling filter
    pub filter: FilterKind,

    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u32,

    /// Seam between the two screens, in native-scale pixels
    pub screen_gap: u32,

    /// Screen arrangement
    pub layout: ScreenLayout,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            filter: FilterKind::None,
            rotation: 0,
            screen_gap: 0,
            layout: ScreenLayout::Stacked,
        }
    }
}

impl VideoConfig {
    /// Load configuration from file or create default
    ///
    /// If the configuration file doesn't exist, creates a default
    /// configuration and saves it to the file.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            // Try to save the default config, but don't fail if we can't
            let _ = config.save();
            config
        })
    }

    /// Load configuration from file
    ///
    /// # Returns
    ///
    /// Result containing the configuration or an error
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to file
    ///
    /// # Returns
    ///
    /// Result indicating success or error
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}
