//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Locating or parsing the category file (fatal)
//! - CommandError: Running an external `brew` command (reported, non-fatal)

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to the category configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No candidate path exists
    #[error("config file not found: {filename} (searched: {})", display_paths(.searched))]
    NotFound {
        filename: String,
        searched: Vec<PathBuf>,
    },

    /// The file exists but could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file does not match the categories schema
    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Errors raised while running an external command
#[derive(Error, Debug)]
pub enum CommandError {
    /// The process could not be started
    #[error("Error executing {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited unsuccessfully
    #[error("Error executing {command}: {status}")]
    Failed {
        command: String,
        status: String,
        output: String,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ConfigError {
    /// Creates a new NotFound error
    pub fn not_found(filename: impl Into<String>, searched: Vec<PathBuf>) -> Self {
        ConfigError::NotFound {
            filename: filename.into(),
            searched,
        }
    }

    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Parse error
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl CommandError {
    /// The command line that failed
    pub fn command(&self) -> &str {
        match self {
            CommandError::Spawn { command, .. } | CommandError::Failed { command, .. } => command,
        }
    }
}
