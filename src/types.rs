use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::TurnstileError;

/// Quantity shown for records that omit it (or send a non-positive value)
pub const DEFAULT_QUANTITY: u32 = 1;

/// One purchased ticket as served by `GET /tickets`.
///
/// Decoding is lenient in the same places the service is known to be sloppy:
/// `quantity` falls back to 1, `amount` to zero, and the two flags to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub ticket_id: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,

    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: u32,

    #[serde(
        default,
        deserialize_with = "lenient_amount",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub amount: Decimal,

    #[serde(default, deserialize_with = "null_as_false")]
    pub is_paid: bool,

    #[serde(default, deserialize_with = "null_as_false")]
    pub is_used: bool,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub purchase_date: String,
}

impl Default for Ticket {
    fn default() -> Self {
        Self {
            ticket_id: String::new(),
            email: String::new(),
            category: String::new(),
            quantity: DEFAULT_QUANTITY,
            amount: Decimal::ZERO,
            is_paid: false,
            is_used: false,
            purchase_date: String::new(),
        }
    }
}

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(quantity_from_value)
        .unwrap_or(DEFAULT_QUANTITY))
}

fn quantity_from_value(value: &Value) -> Option<u32> {
    let quantity = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u32::try_from(quantity).ok().filter(|q| *q > 0)
}

fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(amount_from_value)
        .unwrap_or(Decimal::ZERO))
}

fn amount_from_value(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Status predicate applied on top of the text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Used,
    Unused,
    Paid,
    Pending,
}

pub const VALID_STATUS_FILTERS: &[&str] = &["all", "used", "unused", "paid", "pending"];

impl StatusFilter {
    /// Every filter, in display order
    pub const ALL: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Used,
        StatusFilter::Unused,
        StatusFilter::Paid,
        StatusFilter::Pending,
    ];

    /// Human-readable label used by the dashboard filter bar
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Tickets",
            StatusFilter::Used => "Used Tickets",
            StatusFilter::Unused => "Unused Tickets",
            StatusFilter::Paid => "Paid Only",
            StatusFilter::Pending => "Pending Payment",
        }
    }

    /// Whether a ticket passes this status predicate
    pub fn matches(self, ticket: &Ticket) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Used => ticket.is_used,
            StatusFilter::Unused => !ticket.is_used,
            StatusFilter::Paid => ticket.is_paid,
            StatusFilter::Pending => !ticket.is_paid,
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Filter bound to a 1-based number key, if any
    pub fn from_shortcut(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Used => write!(f, "used"),
            StatusFilter::Unused => write!(f, "unused"),
            StatusFilter::Paid => write!(f, "paid"),
            StatusFilter::Pending => write!(f, "pending"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TurnstileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "used" => Ok(StatusFilter::Used),
            "unused" => Ok(StatusFilter::Unused),
            "paid" => Ok(StatusFilter::Paid),
            "pending" => Ok(StatusFilter::Pending),
            _ => Err(TurnstileError::InvalidStatusFilter(s.to_string())),
        }
    }
}
