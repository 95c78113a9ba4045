//! `turnstile mark`: flip the used flag of one ticket

use serde_json::json;

use super::{colored_entry, colored_id, stdout_colored};
use crate::config::Config;
use crate::error::{Result, TurnstileError};
use crate::formatting::entry_label;
use crate::remote::HttpTicketService;
use crate::store::TicketStore;

/// Load the collection, toggle `isUsed` on `ticket_id` and print the result.
///
/// The update goes through the same optimistic path as the dashboard, so a
/// rejected patch leaves nothing changed and reports the update failure.
pub async fn cmd_mark(ticket_id: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let service = HttpTicketService::from_config(&config)?;

    let mut store = TicketStore::new();
    store.load(&service).await?;

    let current = store
        .get(ticket_id)
        .map(|t| t.is_used)
        .ok_or_else(|| TurnstileError::TicketNotFound(ticket_id.to_string()))?;

    let is_used = store.toggle_used(&service, ticket_id, current).await?;
    tracing::debug!(ticket_id, is_used, "ticket updated");

    if output_json {
        let output = json!({
            "ticketId": ticket_id,
            "isUsed": is_used,
            "entry": entry_label(is_used),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let colored = stdout_colored();
        println!(
            "{}: {}",
            colored_id(ticket_id, colored),
            colored_entry(is_used, colored)
        );
    }

    Ok(())
}
