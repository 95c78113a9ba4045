//! Scrollable ticket table component
//!
//! Displays the visible tickets with selection highlighting and
//! "N more above/below" scroll indicators.

use iocraft::prelude::*;
use jiff::tz::TimeZone;

use crate::formatting::{
    entry_label, format_currency, format_purchase_date, payment_label, toggle_label,
};
use crate::tui::theme::theme;
use crate::types::Ticket;

const ID_WIDTH: u32 = 12;
const CATEGORY_WIDTH: u32 = 14;
const QTY_WIDTH: u32 = 5;
const AMOUNT_WIDTH: u32 = 14;
const PAYMENT_WIDTH: u32 = 10;
const ENTRY_WIDTH: u32 = 8;
const DATE_WIDTH: u32 = 24;
const ACTION_WIDTH: u32 = 13;

/// Rows drawn from `scroll_offset` once each "more above/below" indicator
/// has taken its line. Never less than one row when anything is visible.
pub fn effective_visible_height(scroll_offset: usize, visible_height: usize, total: usize) -> usize {
    if total == 0 || visible_height == 0 {
        return visible_height;
    }

    let mut effective = visible_height;
    if scroll_offset > 0 {
        effective = effective.saturating_sub(1);
    }
    if scroll_offset + effective < total {
        effective = effective.saturating_sub(1);
    }
    effective.max(1)
}

/// Display strings for one table row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketRowView {
    pub ticket_id: String,
    pub email: String,
    pub category: String,
    pub quantity: String,
    pub amount: String,
    pub payment: &'static str,
    pub is_paid: bool,
    pub entry: &'static str,
    pub is_used: bool,
    pub purchased: String,
    pub action: &'static str,
}

impl TicketRowView {
    pub fn new(ticket: &Ticket, currency_symbol: &str, tz: &TimeZone, is_pending: bool) -> Self {
        Self {
            ticket_id: ticket.ticket_id.clone(),
            email: ticket.email.clone(),
            category: ticket.category.clone(),
            quantity: ticket.quantity.to_string(),
            amount: format_currency(ticket.amount, currency_symbol),
            payment: payment_label(ticket.is_paid),
            is_paid: ticket.is_paid,
            entry: entry_label(ticket.is_used),
            is_used: ticket.is_used,
            purchased: format_purchase_date(&ticket.purchase_date, tz),
            action: if is_pending {
                "updating..."
            } else {
                toggle_label(ticket.is_used)
            },
        }
    }
}

/// Props for the TicketTable component
#[derive(Default, Props)]
pub struct TicketTableProps {
    /// Every visible row, in order
    pub rows: Vec<TicketRowView>,
    /// Index of the currently selected row
    pub selected_index: usize,
    /// Current scroll offset (first visible row index)
    pub scroll_offset: usize,
    /// Whether the table has focus
    pub has_focus: bool,
    /// Number of rows that fit, excluding the column header
    pub visible_height: usize,
}

/// Scrollable ticket table with selection
#[component]
pub fn TicketTable(props: &TicketTableProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let total = props.rows.len();
    let start = props.scroll_offset.min(total);
    let end = (start + effective_visible_height(start, props.visible_height, total)).min(total);
    let visible_rows: Vec<_> = props.rows[start..end].to_vec();

    let has_more_above = start > 0;
    let has_more_below = end < total;

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            TableHeader()

            #(if has_more_above {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("  {} more above", start),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })

            #(visible_rows.into_iter().enumerate().map(|(i, row)| {
                let is_selected = start + i == props.selected_index;
                element! {
                    TicketRow(
                        row: row,
                        is_selected: is_selected,
                    )
                }
            }))

            #(if has_more_below {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("  {} more below", total - end),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}

#[component]
fn TableHeader() -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let cell = |title: &str, width: Option<u32>| {
        let text = element! {
            Text(content: title, color: theme.accent, weight: Weight::Bold)
        };
        match width {
            Some(width) => element! {
                View(width: width, flex_shrink: 0.0) { #(text) }
            },
            None => element! {
                View(flex_grow: 1.0, overflow: Overflow::Hidden) { #(text) }
            },
        }
    };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 3,
            padding_right: 1,
        ) {
            #(cell("Ticket ID", Some(ID_WIDTH)))
            #(cell("Email", None))
            #(cell("Category", Some(CATEGORY_WIDTH)))
            #(cell("Qty", Some(QTY_WIDTH)))
            #(cell("Amount", Some(AMOUNT_WIDTH)))
            #(cell("Payment", Some(PAYMENT_WIDTH)))
            #(cell("Entry", Some(ENTRY_WIDTH)))
            #(cell("Purchased", Some(DATE_WIDTH)))
            #(cell("Action", Some(ACTION_WIDTH)))
        }
    }
}

/// Props for a single ticket row
#[derive(Default, Props)]
pub struct TicketRowProps {
    pub row: TicketRowView,
    pub is_selected: bool,
}

/// Single ticket row in the table
#[component]
pub fn TicketRow(props: &TicketRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let row = &props.row;

    let bg_color = if props.is_selected {
        Some(theme.highlight)
    } else {
        None
    };
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };
    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            View(width: 2, flex_shrink: 0.0) {
                Text(content: indicator, color: text_color)
            }
            View(width: ID_WIDTH, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                Text(content: row.ticket_id.clone(), color: theme.id_color)
            }
            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                Text(content: row.email.clone(), color: text_color)
            }
            View(width: CATEGORY_WIDTH, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                Text(content: row.category.clone(), color: text_color, weight: Weight::Bold)
            }
            View(width: QTY_WIDTH, flex_shrink: 0.0) {
                Text(content: row.quantity.clone(), color: text_color)
            }
            View(width: AMOUNT_WIDTH, flex_shrink: 0.0) {
                Text(content: row.amount.clone(), color: text_color)
            }
            View(width: PAYMENT_WIDTH, flex_shrink: 0.0) {
                Text(
                    content: row.payment,
                    color: theme.payment_color(row.is_paid),
                    weight: Weight::Bold,
                )
            }
            View(width: ENTRY_WIDTH, flex_shrink: 0.0) {
                Text(
                    content: row.entry,
                    color: theme.entry_color(row.is_used),
                    weight: Weight::Bold,
                )
            }
            View(width: DATE_WIDTH, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                Text(content: row.purchased.clone(), color: text_color)
            }
            View(width: ACTION_WIDTH, flex_shrink: 0.0) {
                Text(content: row.action, color: theme.text_dimmed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn vip_ticket() -> Ticket {
        Ticket {
            ticket_id: "A1".to_string(),
            email: "x@y.com".to_string(),
            category: "VIP".to_string(),
            quantity: 2,
            amount: Decimal::from(50),
            is_paid: true,
            is_used: false,
            purchase_date: "2025-01-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_row_view_formats_fields() {
        let row = TicketRowView::new(&vip_ticket(), "₦", &TimeZone::UTC, false);

        assert_eq!(row.ticket_id, "A1");
        assert_eq!(row.quantity, "2");
        assert_eq!(row.amount, "₦50.00");
        assert_eq!(row.payment, "PAID");
        assert_eq!(row.entry, "VALID");
        assert_eq!(row.purchased, "Jan 1, 2025, 10:00 AM");
        assert_eq!(row.action, "MARK USED");
    }

    #[test]
    fn test_row_view_pending_action() {
        let mut ticket = vip_ticket();
        ticket.is_used = true;
        let row = TicketRowView::new(&ticket, "₦", &TimeZone::UTC, true);

        assert_eq!(row.entry, "USED");
        assert_eq!(row.action, "updating...");
    }

    #[test]
    fn test_row_view_action_follows_entry() {
        let mut ticket = vip_ticket();
        ticket.is_used = true;
        ticket.is_paid = false;
        let row = TicketRowView::new(&ticket, "$", &TimeZone::UTC, false);

        assert_eq!(row.action, "MARK UNUSED");
        assert_eq!(row.payment, "PENDING");
        assert!(row.is_used);
        assert!(!row.is_paid);

        let pending = TicketRowView::new(&vip_ticket(), "$", &TimeZone::UTC, true);
        assert_eq!(pending.entry, "VALID");
        assert_eq!(pending.action, "updating...");
    }

    #[test]
    fn test_effective_visible_height() {
        assert_eq!(effective_visible_height(0, 10, 5), 10);
        assert_eq!(effective_visible_height(0, 10, 30), 9);
        assert_eq!(effective_visible_height(5, 10, 30), 8);
        assert_eq!(effective_visible_height(25, 10, 30), 9);
        assert_eq!(effective_visible_height(5, 2, 30), 1);
        assert_eq!(effective_visible_height(0, 0, 30), 0);
    }
}
