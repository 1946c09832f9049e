//! Locations of the configuration file and the data directory.
//!
//! Without an override the platform directories are used:
//! - Linux: `~/.config/icm/` and `~/.local/share/icm/`
//! - macOS: `~/Library/Application Support/io.github.icm/`
//! - Windows: `%APPDATA%\icm\`

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Result, StandardsError};

/// Environment variable relocating both the config and the data directory.
pub const HOME_ENV_VAR: &str = "ICM_HOME";

const APP_QUALIFIER: &str = "io.github";
const APP_ORG: &str = "icm";
const APP_NAME: &str = "icm";
const CONFIG_FILENAME: &str = "config.toml";
const DATA_DIRNAME: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AppDirs {
    /// Resolve the directories from `ICM_HOME` or the platform defaults.
    pub fn discover() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
            return Ok(Self::under(home));
        }
        let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .ok_or(StandardsError::NoAppDirs)?;
        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Both directories below a single root, as used for `ICM_HOME`.
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            data_dir: root.join(DATA_DIRNAME),
            config_dir: root,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }

    /// Create both directories if they do not exist yet.
    pub fn create(&self) -> Result<()> {
        create_dir(&self.config_dir)?;
        create_dir(&self.data_dir)
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| StandardsError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_root() {
        let dirs = AppDirs::under("/tmp/icm-home");
        assert_eq!(dirs.config_file(), PathBuf::from("/tmp/icm-home/config.toml"));
        assert_eq!(dirs.data_dir, PathBuf::from("/tmp/icm-home/data"));
    }
}
