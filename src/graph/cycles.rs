use std::collections::HashSet;

use crate::constants::graph::CYCLE_SEPARATOR;

/// Ordered, de-duplicated list of cycle paths.
///
/// Paths compare by their exact text, so `a -> b -> a` and `b -> a -> b` are
/// two distinct entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleList {
    paths: Vec<String>,
    seen: HashSet<String>,
}

impl CycleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format `ancestors` followed by `repeated` as a cycle path.
    pub fn format_path(ancestors: &[String], repeated: &str) -> String {
        ancestors
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(repeated))
            .collect::<Vec<_>>()
            .join(CYCLE_SEPARATOR)
    }

    /// Record the cycle closed by `repeated`. Returns the path when it is new.
    pub fn record(&mut self, ancestors: &[String], repeated: &str) -> Option<&str> {
        let path = Self::format_path(ancestors, repeated);
        self.insert(path)
    }

    pub fn insert(&mut self, path: String) -> Option<&str> {
        if !self.seen.insert(path.clone()) {
            return None;
        }

        self.paths.push(path);
        self.paths.last().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.paths
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.seen.contains(path)
    }

    /// Whether `from -> to` is a step of any cycle's closed loop.
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.iter()
            .any(|path| cycle_steps(path).into_iter().any(|(a, b)| a == from && b == to))
    }

    /// Whether `name` is a member of any cycle's closed loop.
    pub fn contains_package(&self, name: &str) -> bool {
        self.iter()
            .any(|path| cycle_members(path).contains(&name))
    }
}

/// Members of the closed loop of a cycle path.
///
/// The ancestors leading up to the loop are dropped, so `root -> a -> b -> a`
/// yields `[a, b, a]`.
pub fn cycle_members(path: &str) -> Vec<&str> {
    let members: Vec<&str> = path.split(CYCLE_SEPARATOR).collect();
    let Some(last) = members.last() else {
        return members;
    };

    let start = members.iter().position(|m| m == last).unwrap_or(0);
    members[start..].to_vec()
}

/// Consecutive `(from, to)` pairs of the closed loop of a cycle path.
pub fn cycle_steps(path: &str) -> Vec<(&str, &str)> {
    cycle_members(path)
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn path(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_format_path() {
        assert_eq!(CycleList::format_path(&path(&["a", "b"]), "a"), "a -> b -> a");
        assert_eq!(CycleList::format_path(&[], "a"), "a");
    }

    #[test]
    fn test_record_deduplicates_exact_text() {
        let mut cycles = CycleList::new();

        assert_eq!(cycles.record(&path(&["a"]), "a"), Some("a -> a"));
        assert_eq!(cycles.record(&path(&["a"]), "a"), None);
        assert_eq!(cycles.len(), 1);
    }

    #[test]
    fn test_rotations_are_distinct() {
        let mut cycles = CycleList::new();
        cycles.record(&path(&["a", "b"]), "a");
        cycles.record(&path(&["b", "a"]), "b");

        assert_eq!(cycles.as_slice(), ["a -> b -> a", "b -> a -> b"]);
    }

    #[test]
    fn test_contains_edge_and_package() {
        let mut cycles = CycleList::new();
        cycles.record(&path(&["root", "a", "b"]), "a");

        assert!(cycles.contains("root -> a -> b -> a"));
        assert!(cycles.contains_edge("a", "b"));
        assert!(cycles.contains_edge("b", "a"));
        assert!(!cycles.contains_edge("root", "a"));
        assert!(cycles.contains_package("b"));
        assert!(!cycles.contains_package("root"));
        assert!(!cycles.contains_package("c"));
    }

    #[test]
    fn test_cycle_members_and_steps() {
        assert_eq!(cycle_members("r -> x -> y -> x"), vec!["x", "y", "x"]);
        assert_eq!(cycle_steps("x -> y -> x"), vec![("x", "y"), ("y", "x")]);
        assert_eq!(cycle_steps("a -> a"), vec![("a", "a")]);
        assert!(cycle_steps("solo").is_empty());
    }
}
