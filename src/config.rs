//! Category file lookup and parsing
//!
//! This module provides:
//! - The ordered list of directories searched for the config file
//! - Loading the `categories` document from YAML (or TOML by extension)

use crate::domain::Categories;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config filename used when none is given on the command line
pub const DEFAULT_CONFIG_FILENAME: &str = "packages.yaml";

/// Environment variable holding extra colon-separated search directories
pub const CONFIG_PATHS_ENV: &str = "BREWUP_CONFIG_PATHS";

/// Directory under `$HOME` searched for the config file
pub const HOME_CONFIG_DIR: &str = ".brew-aware-upgrade";

/// Top-level shape of the config file
#[derive(Debug, Deserialize)]
struct ConfigDocument {
    categories: Categories,
}

/// Directories searched for the config file, highest priority first
#[derive(Debug, Clone, Default)]
pub struct SearchPaths {
    /// Directories from `BREWUP_CONFIG_PATHS`, in the order given
    pub custom: Vec<PathBuf>,
    /// Directory containing the running binary
    pub exe_dir: Option<PathBuf>,
    /// The user's home directory
    pub home: Option<PathBuf>,
}

impl SearchPaths {
    /// Build search paths from the process environment
    pub fn from_env() -> Self {
        let custom = std::env::var(CONFIG_PATHS_ENV)
            .ok()
            .map(|paths| Self::split_custom(&paths))
            .unwrap_or_default();

        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        let home = std::env::var_os("HOME").map(PathBuf::from);

        Self {
            custom,
            exe_dir,
            home,
        }
    }

    /// Split a colon-separated directory list, keeping order
    pub fn split_custom(paths: &str) -> Vec<PathBuf> {
        if paths.is_empty() {
            return Vec::new();
        }
        paths.split(':').map(PathBuf::from).collect()
    }

    /// Candidate file paths for `filename`, in search order
    pub fn candidates(&self, filename: &str) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> =
            self.custom.iter().map(|dir| dir.join(filename)).collect();

        if let Some(ref dir) = self.exe_dir {
            candidates.push(dir.join(filename));
        }
        if let Some(ref home) = self.home {
            candidates.push(home.join(HOME_CONFIG_DIR).join(filename));
        }
        candidates.push(PathBuf::from(filename));

        candidates
    }

    /// First candidate that exists on disk
    pub fn find(&self, filename: &str) -> Result<PathBuf, ConfigError> {
        let candidates = self.candidates(filename);
        match candidates.iter().find(|path| path.exists()) {
            Some(path) => Ok(path.clone()),
            None => Err(ConfigError::not_found(filename, candidates)),
        }
    }
}

/// Parse a config document; `.toml` files use TOML, everything else YAML
pub fn parse_categories(path: &Path, content: &str) -> Result<Categories, ConfigError> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let document: ConfigDocument = if is_toml {
        toml::from_str(content).map_err(|e| ConfigError::parse(path, e.to_string()))?
    } else {
        serde_norway::from_str(content).map_err(|e| ConfigError::parse(path, e.to_string()))?
    };

    Ok(document.categories)
}

/// Read and parse the config file at `path`
pub fn load_categories(path: &Path) -> Result<Categories, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
    tracing::debug!(path = %path.display(), "config file content:\n{}", content);
    parse_categories(path, &content)
}
