//! Tests for department grouping

use std::collections::HashSet;

use shared::EmployeeId;

use super::fixtures::*;
use crate::core::{Roster, distinct_departments, filter, group_by_department};

#[test]
fn test_groups_follow_first_appearance() {
    let roster = mixed_roster();
    let groups = group_by_department(&roster);

    let keys: Vec<&str> = groups.iter().map(|g| g.department).collect();
    assert_eq!(keys, vec!["Sales", "Engineering", "Admin"]);
}

#[test]
fn test_group_members_keep_roster_order() {
    let roster = mixed_roster();
    let groups = group_by_department(&roster);

    let sales: Vec<EmployeeId> = groups[0].employees.iter().filter_map(|e| e.id.clone()).collect();
    let engineering: Vec<EmployeeId> = groups[1].employees.iter().filter_map(|e| e.id.clone()).collect();

    assert_eq!(sales, vec![EmployeeId::from(10), EmployeeId::from(12)]);
    assert_eq!(engineering, vec![EmployeeId::from(11), EmployeeId::from(14)]);
}

#[test]
fn test_empty_roster_has_no_groups() {
    assert!(group_by_department(&Roster::default()).is_empty());
}

#[test]
fn test_grouping_filtered_roster_is_exact_partition() {
    let roster = mixed_roster();

    for query in probe_queries() {
        let filtered = filter(&roster, query);
        let groups = group_by_department(&filtered);

        let keys: Vec<String> = groups.iter().map(|g| g.department.to_string()).collect();
        assert_eq!(keys, distinct_departments(&filtered), "query {query:?}");

        let grouped: Vec<EmployeeId> = groups
            .iter()
            .flat_map(|g| g.employees.iter().filter_map(|e| e.id.clone()))
            .collect();
        let unique: HashSet<&EmployeeId> = grouped.iter().collect();
        assert_eq!(unique.len(), grouped.len(), "duplicates for query {query:?}");
        assert_eq!(grouped.len(), filtered.len(), "omissions for query {query:?}");

        for group in &groups {
            assert!(group.employees.iter().all(|e| e.department == group.department));
        }
    }
}
