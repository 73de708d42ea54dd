//! User settings read from settings.json in the app data directory

use crate::constants::DEFAULT_ASSETS_DIR;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_w: f32,
    pub window_h: f32,

    // Paths
    pub assets_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_w: 480.0,
            window_h: 640.0,
            assets_dir: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    /// Directory image paths are resolved against
    pub fn assets_dir_or_default(&self) -> PathBuf {
        self.assets_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
    }
}
