//! brewup - Category-aware Homebrew upgrade library
//!
//! Splits `brew outdated` into user-defined priority categories:
//! - highest_priority and priority are upgraded in one batch each
//! - large_size packages are upgraded and cleaned up one at a time
//! - a full `brew upgrade` follows when every category is selected

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod package_manager;
pub mod progress;
