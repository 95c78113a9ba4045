//! `turnstile ls`: load once and print the filtered tickets

use jiff::tz::TimeZone;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{colored_entry, colored_id, colored_payment, stdout_colored};
use crate::config::Config;
use crate::error::Result;
use crate::formatting::{format_currency, format_purchase_date};
use crate::remote::HttpTicketService;
use crate::store::TicketStore;
use crate::types::{StatusFilter, Ticket};

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "Ticket ID")]
    ticket_id: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Entry")]
    entry: String,
    #[tabled(rename = "Purchased")]
    purchased: String,
}

/// List tickets matching a search term and status filter
pub async fn cmd_ls(search: Option<&str>, status: StatusFilter, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let service = HttpTicketService::from_config(&config)?;

    let mut store = TicketStore::new();
    store.load(&service).await?;

    let term = search.unwrap_or_default();
    let visible = store.visible(term, status);
    tracing::debug!(
        total = store.len(),
        visible = visible.len(),
        %status,
        "filtered tickets"
    );

    if output_json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!(
        "{}",
        render_listing(
            &visible,
            term,
            &config.currency_symbol,
            &TimeZone::system(),
            stdout_colored(),
        )
    );
    Ok(())
}

/// Render the ticket table followed by the total, or the empty message
pub fn render_listing(
    tickets: &[&Ticket],
    search_term: &str,
    currency_symbol: &str,
    tz: &TimeZone,
    colored: bool,
) -> String {
    if tickets.is_empty() {
        return if search_term.trim().is_empty() {
            "No tickets found.".to_string()
        } else {
            "No tickets found. Try adjusting your search.".to_string()
        };
    }

    let rows: Vec<TicketRow> = tickets
        .iter()
        .map(|t| TicketRow {
            ticket_id: colored_id(&t.ticket_id, colored),
            email: t.email.clone(),
            category: t.category.clone(),
            quantity: t.quantity,
            amount: format_currency(t.amount, currency_symbol),
            payment: colored_payment(t.is_paid, colored),
            entry: colored_entry(t.is_used, colored),
            purchased: format_purchase_date(&t.purchase_date, tz),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!("{table}\n\nTotal tickets: {}", tickets.len())
}
