//! Ticket dashboard command (`turnstile dashboard`)

use std::sync::Arc;

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{Result, TurnstileError};
use crate::logging;
use crate::remote::HttpTicketService;
use crate::tui::Dashboard;

/// Launch the ticket dashboard TUI
pub async fn cmd_dashboard() -> Result<()> {
    if !logging::init_dashboard() {
        eprintln!("warning: could not open the log file, logging is disabled");
    }

    let config = Config::load()?;
    let service = Arc::new(HttpTicketService::from_config(&config)?);
    tracing::info!(api_url = %service.base_url(), "starting dashboard");

    element!(Dashboard(
        service: Some(service),
        currency_symbol: config.currency_symbol.clone(),
    ))
    .fullscreen()
    .await
    .map_err(|e| TurnstileError::Other(format!("TUI error: {e}")))
}
