//! Active category selection derived from command-line flags

use super::Category;
use std::collections::BTreeSet;

/// The set of category names chosen for one run
///
/// Names are kept verbatim; a name that is not a known category is accepted
/// and simply never matches anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    /// Build the selection from the `-c` list and the `-P` shorthand
    pub fn from_flags(categories: Option<&str>, priority: bool) -> Self {
        let mut names = BTreeSet::new();

        if priority {
            names.insert(Category::HighestPriority.name().to_string());
            names.insert(Category::Priority.name().to_string());
        }

        if let Some(list) = categories.filter(|l| !l.is_empty()) {
            for token in list.split(',') {
                names.insert(token.trim().to_string());
            }
        }

        if names.is_empty() {
            return Self::all();
        }

        Self { names }
    }

    /// Every known category
    pub fn all() -> Self {
        Self {
            names: Category::all()
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
        }
    }

    /// Whether the category was selected
    pub fn contains(&self, category: Category) -> bool {
        self.names.contains(category.name())
    }

    /// Whether the selection counts as "everything"
    ///
    /// Compares sizes only, so three arbitrary names also qualify.
    pub fn is_all(&self) -> bool {
        self.names.len() == Category::all().len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
