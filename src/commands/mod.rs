mod config;
mod dashboard;
mod ls;
mod mark;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use dashboard::cmd_dashboard;
pub use ls::{cmd_ls, render_listing};
pub use mark::cmd_mark;

use std::io::{self, IsTerminal};

use owo_colors::OwoColorize;

use crate::formatting::{entry_label, payment_label};

/// Whether CLI output should carry ANSI colors
pub(crate) fn stdout_colored() -> bool {
    io::stdout().is_terminal()
}

pub(crate) fn colored_id(ticket_id: &str, colored: bool) -> String {
    if colored {
        ticket_id.yellow().to_string()
    } else {
        ticket_id.to_string()
    }
}

/// PAID in red, PENDING in yellow
pub(crate) fn colored_payment(is_paid: bool, colored: bool) -> String {
    let label = payment_label(is_paid);
    match (colored, is_paid) {
        (false, _) => label.to_string(),
        (true, true) => label.red().bold().to_string(),
        (true, false) => label.yellow().bold().to_string(),
    }
}

/// VALID in green, USED dimmed
pub(crate) fn colored_entry(is_used: bool, colored: bool) -> String {
    let label = entry_label(is_used);
    match (colored, is_used) {
        (false, _) => label.to_string(),
        (true, true) => label.dimmed().to_string(),
        (true, false) => label.green().bold().to_string(),
    }
}
