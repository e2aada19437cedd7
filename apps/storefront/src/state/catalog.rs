//! # Catalog State
//!
//! Holds the current catalog snapshot and arbitrates refreshes.
//!
//! ## Refresh Tickets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  begin_refresh() ──► ticket #1 ─────────── fetch (slow) ─────────┐      │
//! │  begin_refresh() ──► ticket #2 ── fetch ──┐                      │      │
//! │                                           ▼                      ▼      │
//! │                         complete_refresh(#2) ✔   complete_refresh(#1) ✘ │
//! │                                                  (superseded, dropped)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the newest ticket may install a snapshot. A late response from an
//! older fetch never overwrites newer data.

use std::sync::Arc;

use sweetshop_core::{Catalog, CatalogItem, CatalogSnapshot, ItemId};
use tracing::{debug, warn};

/// Handle for one in-flight catalog fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// The most recently loaded catalog.
#[derive(Debug, Default)]
pub struct CatalogState {
    snapshot: Arc<CatalogSnapshot>,
    issued: u64,
    installed: u64,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an already loaded snapshot.
    pub fn with_snapshot(snapshot: CatalogSnapshot) -> Self {
        CatalogState {
            snapshot: Arc::new(snapshot),
            ..Self::default()
        }
    }

    /// Registers a new fetch. Any earlier ticket is superseded.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        debug!(ticket = self.issued, "Catalog refresh started");
        RefreshTicket(self.issued)
    }

    /// Installs `snapshot` if `ticket` is still the newest one.
    ///
    /// Returns `false` (and drops the snapshot) for superseded tickets.
    pub fn complete_refresh(&mut self, ticket: RefreshTicket, snapshot: CatalogSnapshot) -> bool {
        if ticket.0 != self.issued || ticket.0 <= self.installed {
            warn!(
                ticket = ticket.0,
                latest = self.issued,
                "Discarding superseded catalog refresh"
            );
            return false;
        }

        debug!(ticket = ticket.0, items = snapshot.len(), "Catalog refresh installed");
        self.snapshot = Arc::new(snapshot);
        self.installed = ticket.0;
        true
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn items(&self) -> &[CatalogItem] {
        self.snapshot.items()
    }
}

impl Catalog for CatalogState {
    fn get_item(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.snapshot.get_item(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(json: &str) -> CatalogSnapshot {
        CatalogSnapshot::from_json(json, None).unwrap()
    }

    #[test]
    fn test_refresh_installs_snapshot() {
        let mut state = CatalogState::new();
        assert!(state.items().is_empty());

        let ticket = state.begin_refresh();
        assert!(state.complete_refresh(
            ticket,
            snapshot(r#"[{"id": 1, "name": "Rasgulla", "price": 280, "stock": 15}]"#)
        ));
        assert!(state.get_item(&ItemId::Numeric(1)).is_some());
    }

    #[test]
    fn test_stale_refresh_is_discarded() {
        let mut state = CatalogState::new();
        let slow = state.begin_refresh();
        let fast = state.begin_refresh();

        assert!(state.complete_refresh(
            fast,
            snapshot(r#"[{"id": 2, "name": "Gulab Jamun", "price": 320, "stock": 12}]"#)
        ));
        assert!(!state.complete_refresh(
            slow,
            snapshot(r#"[{"id": 1, "name": "Rasgulla", "price": 280, "stock": 15}]"#)
        ));

        assert!(state.get_item(&ItemId::Numeric(2)).is_some());
        assert!(state.get_item(&ItemId::Numeric(1)).is_none());
    }

    #[test]
    fn test_ticket_completes_once() {
        let mut state = CatalogState::new();
        let ticket = state.begin_refresh();
        assert!(state.complete_refresh(ticket, CatalogSnapshot::default()));
        assert!(!state.complete_refresh(ticket, CatalogSnapshot::default()));
    }
}
