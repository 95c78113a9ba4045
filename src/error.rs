use thiserror::Error;

#[derive(Error, Debug)]
pub enum TurnstileError {
    /// The ticket collection could not be fetched. The payload is the
    /// underlying cause, kept for logs; users only see the generic text.
    #[error("Failed to fetch tickets. Please try again later.")]
    LoadFailure(String),

    #[error("Failed to update ticket status. Please try again.")]
    UpdateFailure { ticket_id: String, reason: String },

    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("ticket '{0}' already has an update in flight")]
    ToggleInFlight(String),

    #[error("invalid status filter '{0}'")]
    InvalidStatusFilter(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl TurnstileError {
    /// Underlying cause for logging, falling back to the display text.
    pub fn detail(&self) -> String {
        match self {
            TurnstileError::LoadFailure(cause) => cause.clone(),
            TurnstileError::UpdateFailure { ticket_id, reason } => {
                format!("{ticket_id}: {reason}")
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TurnstileError>;
