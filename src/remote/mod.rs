//! Remote ticket service.
//!
//! The service is an external collaborator reachable through exactly two
//! calls: list every ticket, and flip the `isUsed` flag of one ticket.

pub mod http;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Ticket;

pub use http::HttpTicketService;

/// Body of `PATCH /tickets/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsedPatch {
    pub is_used: bool,
}

/// Common interface for ticket services
pub trait TicketService: Send + Sync {
    /// Fetch the full ticket collection, in server order.
    ///
    /// Every failure maps to `TurnstileError::LoadFailure`.
    fn list_tickets(&self) -> impl Future<Output = Result<Vec<Ticket>>> + Send;

    /// Set the `isUsed` flag of one ticket.
    ///
    /// Every failure maps to `TurnstileError::UpdateFailure`.
    fn set_used(&self, ticket_id: &str, is_used: bool) -> impl Future<Output = Result<()>> + Send;
}
