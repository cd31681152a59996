use std::time::Duration;

use crate::error::CreditsError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("credits-rtf/", env!("CARGO_PKG_VERSION"));

/// Status and raw body of one HTTP GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn status(status: u16) -> Self {
        Self { status, body: Vec::new() }
    }
}

/// Where license files are fetched from.
///
/// `get` blocks until the request completes; callers issue one request at a
/// time.
pub trait LicenseSource {
    fn get(&self, url: &str) -> Result<HttpReply, CreditsError>;
}

/// Blocking HTTPS client for raw.githubusercontent.com.
pub struct HttpLicenseSource {
    client: reqwest::blocking::Client,
}

impl HttpLicenseSource {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl LicenseSource for HttpLicenseSource {
    fn get(&self, url: &str) -> Result<HttpReply, CreditsError> {
        let transport = |e: reqwest::Error| CreditsError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(transport)?.to_vec();
        Ok(HttpReply { status, body })
    }
}
