//! Snapshot of packages Homebrew reports as outdated

use std::collections::HashSet;

/// Package identifiers with a pending upgrade
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutdatedSet {
    packages: HashSet<String>,
}

impl OutdatedSet {
    /// Parse newline-delimited `brew outdated --quiet` output
    pub fn parse(output: &str) -> Self {
        let packages = output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { packages }
    }

    /// Exact-match lookup
    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains(package)
    }

    /// The declared packages that are outdated, in declared order
    pub fn intersect<'a>(&self, declared: &'a [String]) -> Vec<&'a str> {
        declared
            .iter()
            .filter(|pkg| self.contains(pkg))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Sorted identifiers, for stable diagnostics
    pub fn sorted(&self) -> Vec<&str> {
        let mut packages: Vec<&str> = self.packages.iter().map(String::as_str).collect();
        packages.sort_unstable();
        packages
    }
}

impl<S: Into<String>> FromIterator<S> for OutdatedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            packages: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let set = OutdatedSet::parse("wget\n\ngit\n  \nnode\n");
        assert_eq!(set.len(), 3);
        assert_eq!(set.sorted(), vec!["git", "node", "wget"]);
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(OutdatedSet::parse("").is_empty());
        assert!(OutdatedSet::parse("\n\n").is_empty());
    }

    #[test]
    fn test_matching_is_exact() {
        let set = OutdatedSet::parse("python@3.12\n");
        assert!(set.contains("python@3.12"));
        assert!(!set.contains("python"));
        assert!(!set.contains("Python@3.12"));
    }

    #[test]
    fn test_intersect_preserves_declared_order() {
        let set: OutdatedSet = ["c", "a"].into_iter().collect();
        let names = declared(&["a", "b", "c"]);
        let result = set.intersect(&names);
        assert_eq!(result, vec!["a", "c"]);
    }

    #[test]
    fn test_intersect_single_match() {
        let set: OutdatedSet = ["b"].into_iter().collect();
        assert_eq!(set.intersect(&declared(&["a", "b", "c"])), vec!["b"]);
    }

    #[test]
    fn test_intersect_none() {
        let set: OutdatedSet = ["z"].into_iter().collect();
        assert!(set.intersect(&declared(&["a", "b"])).is_empty());
    }
}
