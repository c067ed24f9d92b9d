//! Test helpers and store doubles for roster tests

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use roster::{DirectoryError, DirectoryResult, EmployeeStore, MockEmployeeStore};
use shared::{Employee, EmployeeId, NewEmployee, PartialEmployee};
use tokio::sync::oneshot;

use super::fixtures::TestFixtures;

/// Builder for mock stores with the reads an edit session performs
pub struct StoreBuilder {
    store: MockEmployeeStore,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            store: MockEmployeeStore::new(),
        }
    }

    /// `get_employee` answers with the fixture whose id matches, 404 otherwise
    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        let lookup = employees.clone();
        self.store.expect_get_employee().returning(move |id| {
            lookup
                .iter()
                .find(|e| e.id.as_ref().map(EmployeeId::as_str) == Some(id.as_str()))
                .cloned()
                .ok_or_else(|| DirectoryError::not_found(id))
        });
        self.store
            .expect_list_employees()
            .returning(move || Ok(employees.clone()));
        self
    }

    pub fn with_default_roster(self) -> Self {
        self.with_employees(TestFixtures::roster())
    }

    pub fn mock(&mut self) -> &mut MockEmployeeStore {
        &mut self.store
    }

    pub fn build(self) -> MockEmployeeStore {
        self.store
    }
}

/// Store whose `list_employees` calls resolve only when the test says so
///
/// Each call takes the next gate in order; the roster sent on that gate's
/// sender becomes the call's result.
pub struct GatedStore {
    gates: Mutex<VecDeque<oneshot::Receiver<Vec<Employee>>>>,
    calls: AtomicUsize,
}

impl GatedStore {
    pub fn new(count: usize) -> (Self, Vec<oneshot::Sender<Vec<Employee>>>) {
        let mut senders = Vec::with_capacity(count);
        let mut gates = VecDeque::with_capacity(count);
        for _ in 0..count {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            gates.push_back(rx);
        }
        let store = Self {
            gates: Mutex::new(gates),
            calls: AtomicUsize::new(0),
        };
        (store, senders)
    }

    /// Number of `list_employees` calls that have taken a gate
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Yield until at least `count` calls are parked on their gates
    pub async fn wait_for_calls(&self, count: usize) {
        while self.calls() < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl EmployeeStore for GatedStore {
    async fn list_employees(&self) -> DirectoryResult<Vec<Employee>> {
        let gate = self
            .gates
            .lock()
            .map_err(|_| DirectoryError::fetch("gate lock poisoned"))?
            .pop_front()
            .ok_or_else(|| DirectoryError::fetch("no gate left"))?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        gate.await.map_err(|_| DirectoryError::fetch("gate dropped"))
    }

    async fn get_employee(&self, id: &EmployeeId) -> DirectoryResult<Employee> {
        Err(DirectoryError::not_found(id))
    }

    async fn create_employee(&self, _employee: &NewEmployee) -> DirectoryResult<Employee> {
        Err(DirectoryError::fetch("not supported"))
    }

    async fn update_employee(&self, _id: &EmployeeId, _update: &PartialEmployee) -> DirectoryResult<Employee> {
        Err(DirectoryError::fetch("not supported"))
    }

    async fn delete_employee(&self, _id: &EmployeeId) -> DirectoryResult<()> {
        Err(DirectoryError::fetch("not supported"))
    }
}
