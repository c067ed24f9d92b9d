//! Distinct department names of a roster

use std::collections::HashSet;

use super::roster::Roster;

/// Each department exactly once, in order of first appearance
pub fn distinct_departments(roster: &Roster) -> Vec<String> {
    let mut seen = HashSet::new();
    roster
        .iter()
        .filter(|employee| seen.insert(employee.department.as_str()))
        .map(|employee| employee.department.clone())
        .collect()
}
