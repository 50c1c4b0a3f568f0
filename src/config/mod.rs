use serde::Deserialize;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "waypoint-export";

fn default_pretty() -> bool {
    true
}
fn default_verbose() -> bool {
    false
}

/// Settings read from `waypoint-export.toml`
///
/// ```toml
/// input = "data/AustrianDistrictsCities.csv"
/// output_dir = "out"
/// pretty = true
/// ```
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: None,
            pretty: default_pretty(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// Load the first config file found in the search paths.
    ///
    /// Files that fail to parse are reported on stderr and skipped.
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly named config file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }
}

/// Local files first, then the user config directory, then home.
fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from(format!("{}.toml", APP_NAME)));
    paths.push(PathBuf::from(format!(".{}.toml", APP_NAME)));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join("config.toml"));
        paths.push(config_dir.join(format!("{}.toml", APP_NAME)));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{}.toml", APP_NAME)));
    }

    paths
}
