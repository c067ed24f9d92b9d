//! Test fixtures and data for roster tests

use shared::{Employee, EmployeeId, EmployeeStatus};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const ANN_ID: &'static str = "1";
    pub const BO_ID: &'static str = "2";
    pub const MISSING_ID: &'static str = "999";

    pub fn ann_id() -> EmployeeId {
        EmployeeId::new(Self::ANN_ID)
    }

    pub fn bo_id() -> EmployeeId {
        EmployeeId::new(Self::BO_ID)
    }

    /// Ann as the store returns her: no status or avatar recorded
    pub fn ann() -> Employee {
        Employee::new(Self::ANN_ID, "Ann", "Smith", "Eng", "2023-03-03")
            .unwrap()
            .with_quote("hi")
    }

    pub fn bo() -> Employee {
        Employee::new(Self::BO_ID, "Bo", "Jones", "Sales", "2022-01-01")
            .unwrap()
            .with_status(EmployeeStatus::Inactive)
            .with_quote("bye")
    }

    pub fn cy() -> Employee {
        Employee::new("3", "Cy", "Park", "Eng", "2021-07-04T12:00:00.000Z")
            .unwrap()
            .with_status(EmployeeStatus::Active)
            .with_quote("Measure twice")
    }

    pub fn roster() -> Vec<Employee> {
        vec![Self::ann(), Self::bo(), Self::cy()]
    }

    pub fn departments() -> Vec<String> {
        vec!["Eng".to_string(), "Sales".to_string()]
    }
}
