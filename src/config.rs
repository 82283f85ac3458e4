//! Configuration loading.
//!
//! Reads `cardfit.toml` from the working directory, falling back to the
//! platform config directory. A missing file means defaults; a file that
//! exists but cannot be parsed is an error. Unknown fields are ignored.
//!
//! ```toml
//! [layout]
//! gap = 5.0
//! max_iterations = 100
//! refine_steps = 10
//!
//! [viewport]
//! width = 1024.0
//! height = 768.0
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::info;

use crate::layout::GridLayout;
use crate::models::Viewport;

const CONFIG_FILE: &str = "cardfit.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub gap: f64,
    pub max_iterations: u32,
    pub refine_steps: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let grid = GridLayout::default();
        Self {
            gap: grid.gap,
            max_iterations: grid.max_iterations,
            refine_steps: grid.refine_steps,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

impl Config {
    pub fn grid_layout(&self) -> GridLayout {
        GridLayout::new(
            self.layout.gap,
            self.layout.max_iterations,
            self.layout.refine_steps,
        )
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport.width, self.viewport.height)
    }
}

/// Best-effort config path: working directory first, then the platform
/// config directory.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return local;
    }
    if let Some(dirs) = ProjectDirs::from("", "", "cardfit") {
        return dirs.config_dir().join(CONFIG_FILE);
    }
    local
}

/// Loads the config at `path`, or the discovered one when `None`.
pub fn load_from(path: Option<&Path>) -> Result<Config> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config at {:?}, using defaults", path);
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read config: {:?}", path));
        }
    };

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {:?}", path))?;
    info!("Loaded config from {:?}", path);
    Ok(config)
}
