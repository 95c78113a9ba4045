//! Shared TUI components for the ticket dashboard

pub mod empty_state;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod search_box;
pub mod shortcuts;
pub mod ticket_table;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use filter_bar::{FilterBar, FilterBarProps};
pub use footer::{
    Footer, FooterProps, Shortcut, dashboard_shortcuts, empty_shortcuts, search_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use shortcuts::ShortcutsBuilder;
pub use ticket_table::{TicketRow, TicketRowProps, TicketRowView, TicketTable, TicketTableProps};
pub use toast::{Toast, ToastLevel, render_toast};
