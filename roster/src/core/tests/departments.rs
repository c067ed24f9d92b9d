//! Tests for distinct department derivation

use super::fixtures::*;
use crate::core::{Roster, distinct_departments};

#[test]
fn test_departments_in_first_appearance_order() {
    assert_eq!(
        distinct_departments(&mixed_roster()),
        vec!["Sales", "Engineering", "Admin"]
    );
}

#[test]
fn test_each_department_listed_once() {
    let roster = mixed_roster();
    let departments = distinct_departments(&roster);

    for employee in roster.iter() {
        let occurrences = departments.iter().filter(|d| **d == employee.department).count();
        assert_eq!(occurrences, 1, "{} should appear exactly once", employee.department);
    }
}

#[test]
fn test_empty_roster_has_no_departments() {
    assert!(distinct_departments(&Roster::default()).is_empty());
}

#[test]
fn test_department_names_are_case_sensitive() {
    let roster = Roster::new(vec![
        employee(1, "A", "One", "Eng", "2020-01-01"),
        employee(2, "B", "Two", "eng", "2020-01-01"),
        employee(3, "C", "Three", "Eng", "2020-01-01"),
    ]);

    assert_eq!(distinct_departments(&roster), vec!["Eng", "eng"]);
}
