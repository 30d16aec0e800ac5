//! Variable bindings for a run.
//!
//! A [`VariableTable`] is built once from the config file and the `-D<name>`
//! bindings on the command line, then shared read-only by every template
//! rendered in the run. Later bindings to the same name overwrite earlier ones.

use std::collections::BTreeMap;

/// Mapping from variable name to replacement text.
///
/// Backed by a `BTreeMap` so substitution visits names in a deterministic
/// (sorted) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    entries: BTreeMap<String, String>,
}

impl VariableTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, overwriting any earlier binding.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Whether `name` has been bound.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Iterate bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for VariableTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut table = Self::new();
        for (k, v) in pairs {
            table.set(k, v);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut table = VariableTable::new();
        table.set("CLASS", "craft");

        assert!(table.has("CLASS"));
        assert_eq!(table.get("CLASS"), Some("craft"));
        assert!(!table.has("MODEL_STRUCT"));
        assert_eq!(table.get("MODEL_STRUCT"), None);
    }

    #[test]
    fn test_later_binding_overwrites() {
        let mut table = VariableTable::new();
        table.set("CLASS", "craft");
        table.set("CLASS", "agent");

        assert_eq!(table.get("CLASS"), Some("agent"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let table: VariableTable = [("Class", "craft")].into_iter().collect();

        assert!(table.has("Class"));
        assert!(!table.has("CLASS"));
    }

    #[test]
    fn test_empty_value_still_counts_as_bound() {
        let table: VariableTable = [("MODEL_STRUCT", "")].into_iter().collect();

        assert!(table.has("MODEL_STRUCT"));
        assert_eq!(table.get("MODEL_STRUCT"), Some(""));
    }

    #[test]
    fn test_iteration_is_sorted_by_name() {
        let table: VariableTable = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();

        let names: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_table() {
        let table = VariableTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
