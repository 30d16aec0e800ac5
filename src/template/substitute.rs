//! Placeholder substitution for a single line.

use super::marker::placeholder;
use crate::vars::VariableTable;

/// Replace every `[% name %]` in `line` with the value bound to `name`.
///
/// Names are visited in the table's sorted order. For each name, all
/// non-overlapping occurrences are replaced left to right. Placeholders for
/// unbound names are left as written.
pub fn substitute(line: &str, vars: &VariableTable) -> String {
    let mut result = line.to_string();
    for (name, value) in vars.iter() {
        let target = placeholder(name);
        if result.contains(&target) {
            result = result.replace(&target, value);
        }
    }
    result
}
