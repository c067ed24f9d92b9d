//! Partition of a roster by department

use std::collections::HashMap;

use serde::Serialize;
use shared::Employee;

use super::roster::Roster;

/// Employees of one department, in roster order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentGroup<'a> {
    pub department: &'a str,
    pub employees: Vec<&'a Employee>,
}

/// Groups keyed in first-appearance order, the same order as
/// [`distinct_departments`](super::departments::distinct_departments)
pub fn group_by_department(roster: &Roster) -> Vec<DepartmentGroup<'_>> {
    group_employees(roster.iter())
}

pub fn group_employees<'a, I>(employees: I) -> Vec<DepartmentGroup<'a>>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<DepartmentGroup<'a>> = Vec::new();

    for employee in employees {
        let department = employee.department.as_str();
        match positions.get(department) {
            Some(&index) => groups[index].employees.push(employee),
            None => {
                positions.insert(department, groups.len());
                groups.push(DepartmentGroup {
                    department,
                    employees: vec![employee],
                });
            }
        }
    }

    groups
}
