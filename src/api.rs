// API client module: a small blocking HTTP client that asks Dinopass for a
// strong password. It is synchronous on purpose: the CLI makes exactly one
// request per run and nothing else happens while it waits.

use crate::error::{Error, Result};
use reqwest::blocking::Client;
use tracing::{debug, info};

/// Endpoint used when `DINOPASS_URL` is not set.
pub const DEFAULT_DINOPASS_URL: &str = "https://dinopass.com/password/strong";

/// Anything that can hand out a single freshly generated password.
///
/// The CLI talks to Dinopass through [`DinopassClient`]; tests plug in
/// canned sources.
pub trait PasswordSource {
    fn fetch_password(&self) -> Result<String>;
}

/// Holds a reqwest blocking client and the URL of the password endpoint.
#[derive(Clone)]
pub struct DinopassClient {
    client: Client,
    url: String,
}

impl DinopassClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::SourceUnavailable { reason: e.to_string() })?;
        Ok(DinopassClient { client, url: url.into() })
    }

    /// Create a client configured from the environment variable
    /// `DINOPASS_URL` or fall back to [`DEFAULT_DINOPASS_URL`].
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("DINOPASS_URL").unwrap_or_else(|_| DEFAULT_DINOPASS_URL.into());
        Self::new(url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PasswordSource for DinopassClient {
    /// GET the endpoint once and return the first line of the body, trimmed.
    fn fetch_password(&self) -> Result<String> {
        info!(url = %self.url, "requesting generated password");
        let res = self.client.get(&self.url)
            .send()
            .map_err(|e| Error::SourceUnavailable { reason: e.to_string() })?;
        if !res.status().is_success() {
            return Err(Error::SourceStatus { status: res.status().as_u16() });
        }
        let body = res.text().map_err(|e| Error::SourceUnavailable { reason: e.to_string() })?;
        let password = body.lines().next().unwrap_or("").trim().to_string();
        debug!(chars = password.chars().count(), "received generated password");
        Ok(password)
    }
}
