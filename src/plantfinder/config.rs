use crate::error::{FinderError, Result};
use crate::view::{ViewOptions, PLACEHOLDER_IMAGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "plantfinder.json";
const DEFAULT_CATALOG_PATH: &str = "data/plants.json";
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
const DEFAULT_DESCRIPTION_PREVIEW: usize = 100;

/// Settings for a session, read from `plantfinder.json`. Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinderConfig {
    /// Where the catalog document lives
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Quiet period before a search keystroke burst is applied
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Display-width budget for card descriptions
    #[serde(default = "default_description_preview")]
    pub description_preview_chars: usize,

    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_PATH)
}

fn default_search_debounce_ms() -> u64 {
    DEFAULT_SEARCH_DEBOUNCE_MS
}

fn default_description_preview() -> usize {
    DEFAULT_DESCRIPTION_PREVIEW
}

fn default_placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            search_debounce_ms: default_search_debounce_ms(),
            description_preview_chars: default_description_preview(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

impl FinderConfig {
    /// Load config from `plantfinder.json` in the given directory, or defaults if absent
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(path)
    }

    /// Load config from an explicit file, which must exist
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FinderError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            description_width: self.description_preview_chars,
            placeholder_image: self.placeholder_image.clone(),
        }
    }
}
