//! Category definitions and the package lists declared for them

use serde::Deserialize;
use std::fmt;

/// The fixed set of upgrade categories, in processing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Upgraded first, in one batch
    HighestPriority,
    /// Upgraded second, in one batch
    Priority,
    /// Upgraded one package at a time, each followed by a cleanup
    LargeSize,
}

impl Category {
    /// Returns the name used on the command line and in the config file
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighestPriority => "highest_priority",
            Category::Priority => "priority",
            Category::LargeSize => "large_size",
        }
    }

    /// Whether outdated packages of this category go into a single `brew upgrade`
    pub fn is_batched(&self) -> bool {
        !matches!(self, Category::LargeSize)
    }

    /// Returns all categories in processing order
    pub fn all() -> &'static [Category] {
        &[
            Category::HighestPriority,
            Category::Priority,
            Category::LargeSize,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Package lists declared under the `categories` key of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Categories {
    #[serde(default)]
    pub highest_priority: Vec<String>,
    #[serde(default)]
    pub priority: Vec<String>,
    #[serde(default)]
    pub large_size: Vec<String>,
}

impl Categories {
    /// Declared packages for a category, in config order
    pub fn packages(&self, category: Category) -> &[String] {
        match category {
            Category::HighestPriority => &self.highest_priority,
            Category::Priority => &self.priority,
            Category::LargeSize => &self.large_size,
        }
    }
}
