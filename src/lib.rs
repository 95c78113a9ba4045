pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatting;
pub mod logging;
pub mod paths;
pub mod remote;
pub mod store;
pub mod tui;
pub mod types;

pub use config::Config;
pub use error::{Result, TurnstileError};
pub use filter::{filter_tickets, matches_search};
pub use remote::{HttpTicketService, TicketService};
pub use store::{PendingToggle, TicketStore};
pub use types::{StatusFilter, Ticket};
