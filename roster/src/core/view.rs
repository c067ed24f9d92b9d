//! Display data for the grouped directory

use serde::Serialize;
use shared::{Employee, EmployeeId, EmployeeStatus};

use super::grouping::group_employees;
use super::roster::Roster;
use super::search::{filter_refs, format_start_date};

/// One table row as shown in a department card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow {
    pub id: Option<EmployeeId>,
    pub full_name: String,
    pub avatar_url: String,
    /// Formatted start date, or the raw value when it does not parse
    pub start_date: String,
    pub quote: String,
    pub status: EmployeeStatus,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            full_name: employee.full_name(),
            avatar_url: employee.effective_avatar_url().to_string(),
            start_date: format_start_date(&employee.date_started)
                .unwrap_or_else(|| employee.date_started.clone()),
            quote: employee.quote.clone(),
            status: employee.effective_status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentSection {
    pub department: String,
    pub rows: Vec<EmployeeRow>,
}

/// Result of running a search over a roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryView {
    pub query: String,
    pub sections: Vec<DepartmentSection>,
}

impl DirectoryView {
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|section| section.rows.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn departments(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.department.as_str())
    }
}

/// Filter then group; cheap enough to rerun on every keystroke
pub fn query(roster: &Roster, search_text: &str) -> DirectoryView {
    let matched = filter_refs(roster, search_text);
    let sections = group_employees(matched)
        .into_iter()
        .map(|group| DepartmentSection {
            department: group.department.to_string(),
            rows: group.employees.into_iter().map(EmployeeRow::from).collect(),
        })
        .collect();

    DirectoryView {
        query: search_text.to_string(),
        sections,
    }
}
