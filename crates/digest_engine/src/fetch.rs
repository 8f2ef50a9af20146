//! One HTTP GET per content API page.
//!
//! The client is built once per fetcher and reused across pages. A response
//! is accepted only if it is a success, declares a JSON content type (or none)
//! and stays within `max_bytes`.

use std::time::Duration;

use digest_logging::digest_debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{redirect, Client, Response, Url};

use crate::{FailureKind, FetchError, FetchOutput};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    /// Media types accepted, compared without parameters.
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 16 * 1024 * 1024,
            allowed_content_types: vec![
                "application/json".to_string(),
                "text/json".to_string(),
            ],
        }
    }
}

/// Retrieves one page of the content API.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(classify)?;
        Ok(Self { client, settings })
    }

    fn media_type_allowed(&self, header: &str) -> bool {
        let media_type = header.split(';').next().unwrap_or_default().trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(media_type))
    }

    fn within_limit(&self, len: u64) -> Result<(), FetchError> {
        if len <= self.settings.max_bytes {
            return Ok(());
        }
        Err(FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(len),
            },
            "response too large",
        ))
    }

    async fn read_body(&self, mut response: Response) -> Result<Vec<u8>, FetchError> {
        if let Some(declared) = response.content_length() {
            self.within_limit(declared)?;
        }
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(classify)? {
            self.within_limit((body.len() + chunk.len()) as u64)?;
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let url = Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        if let Some(header) = content_type.as_deref() {
            if !self.media_type_allowed(header) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: header.to_string(),
                    },
                    "content API did not answer with JSON",
                ));
            }
        }

        let body = self.read_body(response).await?;
        digest_debug!("Received {} bytes ({:?})", body.len(), content_type);
        Ok(FetchOutput { body, content_type })
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_redirect() {
        FailureKind::RedirectLimitExceeded
    } else {
        FailureKind::Network
    };
    FetchError::new(kind, err.to_string())
}
