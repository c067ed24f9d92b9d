//! Roster store holding the most recently fetched roster
//!
//! Every load takes a ticket from a monotonic counter. A fetched roster is
//! applied only if no later ticket has been applied yet, so a slow response
//! can never overwrite the result of a later request. A later request that
//! fails does not invalidate an earlier one that succeeds.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use shared::{component_debug, component_info};
use tokio::sync::RwLock;

use crate::core::{DirectoryView, Roster, query};
use crate::error::DirectoryResult;
use crate::traits::EmployeeStore;

const COMPONENT: &str = "roster_store";

/// What happened to the roster fetched by one `load` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetched roster is now current
    Applied(Arc<Roster>),
    /// A newer roster was applied while this one was in flight; result dropped
    Superseded { ticket: u64, applied: u64 },
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied(_))
    }
}

#[derive(Default)]
struct Snapshot {
    /// Ticket of the load that produced `roster`; 0 before the first apply
    ticket: u64,
    roster: Option<Arc<Roster>>,
}

pub struct RosterStore<S: EmployeeStore> {
    store: Arc<S>,
    current: RwLock<Snapshot>,
    issued: AtomicU64,
}

impl<S: EmployeeStore> RosterStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            current: RwLock::new(Snapshot::default()),
            issued: AtomicU64::new(0),
        }
    }

    /// Fetch the roster and replace the current one unless superseded
    pub async fn load(&self) -> DirectoryResult<LoadOutcome> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let employees = self.store.list_employees().await?;
        let roster = Arc::new(Roster::new(employees));

        let mut current = self.current.write().await;
        if ticket < current.ticket {
            let applied = current.ticket;
            component_debug!(COMPONENT, ticket, applied, "Discarding stale roster response");
            return Ok(LoadOutcome::Superseded { ticket, applied });
        }

        component_info!(COMPONENT, ticket, employees = roster.len(), "Roster loaded");
        current.ticket = ticket;
        current.roster = Some(Arc::clone(&roster));
        Ok(LoadOutcome::Applied(roster))
    }

    /// Most recently applied roster, if any load has completed
    pub async fn current(&self) -> Option<Arc<Roster>> {
        self.current.read().await.roster.clone()
    }

    /// Run a search against the current roster; empty before the first load
    pub async fn search(&self, search_text: &str) -> DirectoryView {
        match self.current().await {
            Some(roster) => query(&roster, search_text),
            None => DirectoryView {
                query: search_text.to_string(),
                sections: Vec::new(),
            },
        }
    }
}
