//! Formatting utilities for ticket display
//!
//! Central place for turning ticket fields into display strings so the CLI
//! table and the dashboard render identically.

use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol used when the configuration does not name one
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₦";

const PURCHASE_DATE_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

/// Format an amount with a currency symbol and exactly two decimals.
///
/// Exact halves round away from zero (`0.125` becomes `0.13`).
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use turnstile::formatting::format_currency;
///
/// assert_eq!(format_currency(Decimal::from(50), "₦"), "₦50.00");
/// assert_eq!(format_currency(Decimal::ZERO, "$"), "$0.00");
/// ```
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    format!(
        "{symbol}{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Format a purchase timestamp as an en-US medium date-time in `tz`.
///
/// Accepts RFC 3339 timestamps, offset-less date-times (read as wall clock
/// time in `tz`) and bare dates (midnight UTC). Anything else is returned
/// unchanged.
pub fn format_purchase_date(raw: &str, tz: &TimeZone) -> String {
    match parse_purchase_date(raw.trim(), tz) {
        Some(zoned) => zoned.strftime(PURCHASE_DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_purchase_date(raw: &str, tz: &TimeZone) -> Option<Zoned> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts.to_zoned(tz.clone()));
    }
    if let Ok(dt) = raw.parse::<DateTime>() {
        return dt.to_zoned(tz.clone()).ok();
    }
    if let Ok(date) = raw.parse::<Date>() {
        let ts = date.to_zoned(TimeZone::UTC).ok()?.timestamp();
        return Some(ts.to_zoned(tz.clone()));
    }
    None
}

pub fn payment_label(is_paid: bool) -> &'static str {
    if is_paid { "PAID" } else { "PENDING" }
}

pub fn entry_label(is_used: bool) -> &'static str {
    if is_used { "USED" } else { "VALID" }
}

/// Label of the action that flips `is_used`
pub fn toggle_label(is_used: bool) -> &'static str {
    if is_used { "MARK UNUSED" } else { "MARK USED" }
}
