//! Core domain models for brewup
//!
//! - Category types and the package lists declared for them
//! - The active category selection for a run
//! - The outdated-package snapshot

mod category;
mod outdated;
mod selection;

pub use category::{Categories, Category};
pub use outdated::OutdatedSet;
pub use selection::Selection;
