//! Stage configuration resource.
//!
//! Settings loaded from an INI file, with safe defaults for every value so
//! a stage can start without any file present.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 1280
//! height = 720
//!
//! [atlas]
//! auto_load_hd = false
//! sd_threshold = 960
//! hd_threshold = 2048
//!
//! [animation]
//! default_fps = 24
//! time_scale = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use super::atlas::{HD_SUFFIX_2X, HD_SUFFIX_4X};
use crate::components::frameanim::DEFAULT_FPS;

/// Default safe values for startup
const DEFAULT_SCREEN_WIDTH: u32 = 1280;
const DEFAULT_SCREEN_HEIGHT: u32 = 720;
const DEFAULT_AUTO_LOAD_HD: bool = false;
const DEFAULT_SD_THRESHOLD: u32 = 960;
const DEFAULT_HD_THRESHOLD: u32 = 2048;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./uistage.ini";

/// Stage configuration resource.
///
/// Stores the screen dimensions the stage starts with, the HD asset
/// selection policy, and animation timing defaults.
#[derive(Resource, Debug, Clone)]
pub struct StageConfig {
    /// Initial screen width in pixels.
    pub screen_width: u32,
    /// Initial screen height in pixels.
    pub screen_height: u32,
    /// Pick higher-resolution asset variants based on screen size.
    pub auto_load_hd: bool,
    /// Largest screen dimension at which standard assets are still used.
    pub sd_threshold: u32,
    /// Screen dimension from which quadruple-resolution assets are used.
    pub hd_threshold: u32,
    /// Frames per second for frame animations that do not set their own.
    pub default_fps: f32,
    /// Initial clock scale.
    pub time_scale: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StageConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            auto_load_hd: DEFAULT_AUTO_LOAD_HD,
            sd_threshold: DEFAULT_SD_THRESHOLD,
            hd_threshold: DEFAULT_HD_THRESHOLD,
            default_fps: DEFAULT_FPS,
            time_scale: DEFAULT_TIME_SCALE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [screen] section
        if let Some(width) = config.getuint("screen", "width").ok().flatten() {
            self.screen_width = width as u32;
        }
        if let Some(height) = config.getuint("screen", "height").ok().flatten() {
            self.screen_height = height as u32;
        }

        // [atlas] section
        if let Some(auto) = config.getbool("atlas", "auto_load_hd").ok().flatten() {
            self.auto_load_hd = auto;
        }
        if let Some(sd) = config.getuint("atlas", "sd_threshold").ok().flatten() {
            self.sd_threshold = sd as u32;
        }
        if let Some(hd) = config.getuint("atlas", "hd_threshold").ok().flatten() {
            self.hd_threshold = hd as u32;
        }

        // [animation] section
        if let Some(fps) = config.getfloat("animation", "default_fps").ok().flatten() {
            self.default_fps = fps as f32;
        }
        if let Some(scale) = config.getfloat("animation", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }

        info!(
            "Loaded config: {}x{} screen, auto_load_hd={}, default_fps={}, time_scale={}",
            self.screen_width, self.screen_height, self.auto_load_hd, self.default_fps, self.time_scale
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [screen] section
        config.set("screen", "width", Some(self.screen_width.to_string()));
        config.set("screen", "height", Some(self.screen_height.to_string()));

        // [atlas] section
        config.set("atlas", "auto_load_hd", Some(self.auto_load_hd.to_string()));
        config.set("atlas", "sd_threshold", Some(self.sd_threshold.to_string()));
        config.set("atlas", "hd_threshold", Some(self.hd_threshold.to_string()));

        // [animation] section
        config.set("animation", "default_fps", Some(self.default_fps.to_string()));
        config.set("animation", "time_scale", Some(self.time_scale.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Resolution suffix for asset filenames, or `None` to use standard
    /// assets. Picks `"4x"` past the HD threshold and `"2x"` past the SD
    /// threshold, judged on the larger screen dimension.
    pub fn hd_suffix(&self) -> Option<&'static str> {
        if !self.auto_load_hd {
            return None;
        }
        let max_dim = self.screen_width.max(self.screen_height);
        if max_dim >= self.hd_threshold {
            Some(HD_SUFFIX_4X)
        } else if max_dim >= self.sd_threshold {
            Some(HD_SUFFIX_2X)
        } else {
            None
        }
    }

    /// Get the screen size.
    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = StageConfig::new();
        assert_eq!(cfg.screen_size(), (1280, 720));
        assert!(!cfg.auto_load_hd);
        assert_eq!(cfg.default_fps, DEFAULT_FPS);
        assert_eq!(cfg.time_scale, 1.0);
    }

    #[test]
    fn test_hd_suffix_off_by_default() {
        let mut cfg = StageConfig::new();
        cfg.screen_width = 4096;
        assert_eq!(cfg.hd_suffix(), None);
    }

    #[test]
    fn test_hd_suffix_thresholds() {
        let mut cfg = StageConfig::new();
        cfg.auto_load_hd = true;

        cfg.screen_width = 800;
        cfg.screen_height = 600;
        assert_eq!(cfg.hd_suffix(), None);

        cfg.screen_width = 960;
        assert_eq!(cfg.hd_suffix(), Some(HD_SUFFIX_2X));

        // Judged on the larger dimension.
        cfg.screen_width = 640;
        cfg.screen_height = 1136;
        assert_eq!(cfg.hd_suffix(), Some(HD_SUFFIX_2X));

        cfg.screen_height = 2048;
        assert_eq!(cfg.hd_suffix(), Some(HD_SUFFIX_4X));
    }
}
