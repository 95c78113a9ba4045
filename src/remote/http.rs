//! reqwest implementation of the ticket service.
//!
//! # Security Note - Logging
//!
//! The bearer token is held as a `SecretString` and only exposed while the
//! `Authorization` header is built. The header value is marked sensitive so
//! reqwest never prints it, even with `TURNSTILE_LOG=reqwest=debug`.

use std::time::Duration;

use reqwest::header::{self, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::config::Config;
use crate::error::{Result, TurnstileError};
use crate::types::Ticket;

use super::{TicketService, UsedPatch};

const TICKETS_PATH: &str = "tickets";

/// Ticket service reached over HTTP
pub struct HttpTicketService {
    client: Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl HttpTicketService {
    /// Create a service for `base_url` with a total request timeout.
    pub fn new(base_url: Url, token: Option<SecretString>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Create a service from configuration (URL, token and timeout)
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.api_base_url()?,
            config.api_token(),
            config.remote_timeout(),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/tickets`, or `{base}/tickets/{id}` with `id` percent-encoded
    /// as a single path segment.
    fn tickets_url(&self, ticket_id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                TurnstileError::Config(format!("api_url '{}' cannot be a base", self.base_url))
            })?;
            segments.pop_if_empty().push(TICKETS_PATH);
            if let Some(id) = ticket_id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let Some(token) = &self.token else {
            return Ok(request);
        };
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| TurnstileError::Config("api_token contains invalid characters".into()))?;
        value.set_sensitive(true);
        Ok(request.header(header::AUTHORIZATION, value))
    }

    async fn fetch(&self) -> std::result::Result<Vec<Ticket>, String> {
        let url = self.tickets_url(None).map_err(|e| e.to_string())?;
        tracing::debug!(%url, "fetching tickets");

        let request = self
            .authorize(self.client.get(url))
            .map_err(|e| e.to_string())?;
        let response = check_status(request.send().await.map_err(|e| e.to_string())?)?;
        response
            .json::<Vec<Ticket>>()
            .await
            .map_err(|e| format!("invalid response body: {e}"))
    }

    async fn patch(&self, ticket_id: &str, is_used: bool) -> std::result::Result<(), String> {
        let url = self.tickets_url(Some(ticket_id)).map_err(|e| e.to_string())?;
        tracing::debug!(%url, is_used, "updating ticket");

        let request = self
            .authorize(self.client.patch(url).json(&UsedPatch { is_used }))
            .map_err(|e| e.to_string())?;
        check_status(request.send().await.map_err(|e| e.to_string())?)?;
        Ok(())
    }
}

fn check_status(response: Response) -> std::result::Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(format!("HTTP {status}"))
    }
}

impl TicketService for HttpTicketService {
    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        match self.fetch().await {
            Ok(tickets) => {
                tracing::debug!(count = tickets.len(), "fetched tickets");
                Ok(tickets)
            }
            Err(reason) => {
                tracing::warn!(%reason, "failed to fetch tickets");
                Err(TurnstileError::LoadFailure(reason))
            }
        }
    }

    async fn set_used(&self, ticket_id: &str, is_used: bool) -> Result<()> {
        self.patch(ticket_id, is_used).await.map_err(|reason| {
            tracing::warn!(ticket_id, %reason, "failed to update ticket");
            TurnstileError::UpdateFailure {
                ticket_id: ticket_id.to_string(),
                reason,
            }
        })
    }
}
