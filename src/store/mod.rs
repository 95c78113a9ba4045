//! In-memory ticket store with optimistic `isUsed` toggling.
//!
//! The store is owned by one dashboard session or one CLI invocation and is
//! never persisted. Records keep the order the service returned them in.

use std::collections::HashSet;

use crate::error::{Result, TurnstileError};
use crate::filter::filter_tickets;
use crate::remote::TicketService;
use crate::types::{StatusFilter, Ticket};

/// An optimistic toggle that has been applied locally but not yet resolved
/// against the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToggle {
    pub ticket_id: String,
    /// Value held by the store before the toggle
    pub previous: bool,
    /// Value sent to the service
    pub requested: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    /// Ids with an unresolved update
    in_flight: HashSet<String>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets,
            in_flight: HashSet::new(),
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, ticket_id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.ticket_id == ticket_id)
    }

    fn get_mut(&mut self, ticket_id: &str) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|t| t.ticket_id == ticket_id)
    }

    /// Replace the contents wholesale after a successful load.
    ///
    /// Pending toggles stay pending; their outcome still applies to the
    /// reloaded record of the same id.
    pub fn replace(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets;
    }

    pub fn is_in_flight(&self, ticket_id: &str) -> bool {
        self.in_flight.contains(ticket_id)
    }

    /// Visible subsequence for a search term and status filter
    pub fn visible(&self, search_term: &str, status_filter: StatusFilter) -> Vec<&Ticket> {
        filter_tickets(&self.tickets, search_term, status_filter)
    }

    /// Apply the optimistic half of a toggle: set `is_used` to `!current`
    /// and mark the id as in flight.
    pub fn begin_toggle(&mut self, ticket_id: &str, current: bool) -> Result<PendingToggle> {
        if self.in_flight.contains(ticket_id) {
            return Err(TurnstileError::ToggleInFlight(ticket_id.to_string()));
        }
        let ticket = self
            .get_mut(ticket_id)
            .ok_or_else(|| TurnstileError::TicketNotFound(ticket_id.to_string()))?;

        let pending = PendingToggle {
            ticket_id: ticket_id.to_string(),
            previous: ticket.is_used,
            requested: !current,
        };
        ticket.is_used = pending.requested;
        self.in_flight.insert(pending.ticket_id.clone());

        Ok(pending)
    }

    /// The service accepted the update; the local value already matches.
    pub fn confirm_toggle(&mut self, pending: &PendingToggle) {
        self.in_flight.remove(&pending.ticket_id);
    }

    /// The service rejected the update; restore the pre-toggle value.
    pub fn rollback_toggle(&mut self, pending: &PendingToggle) {
        if let Some(ticket) = self.get_mut(&pending.ticket_id) {
            ticket.is_used = pending.previous;
        }
        self.in_flight.remove(&pending.ticket_id);
    }

    /// Fetch the full collection. On failure the contents are left as they were.
    pub async fn load<S: TicketService>(&mut self, service: &S) -> Result<()> {
        let tickets = service.list_tickets().await?;
        self.replace(tickets);
        Ok(())
    }

    /// Toggle `is_used` optimistically and resolve it against the service.
    ///
    /// Returns the value the ticket ends up with.
    pub async fn toggle_used<S: TicketService>(
        &mut self,
        service: &S,
        ticket_id: &str,
        current: bool,
    ) -> Result<bool> {
        let pending = self.begin_toggle(ticket_id, current)?;

        match service.set_used(ticket_id, pending.requested).await {
            Ok(()) => {
                self.confirm_toggle(&pending);
                Ok(pending.requested)
            }
            Err(e) => {
                tracing::warn!(ticket_id, detail = %e.detail(), "rolling back ticket toggle");
                self.rollback_toggle(&pending);
                Err(e)
            }
        }
    }
}
