use std::time::Duration;

use async_trait::async_trait;
use profilecard_types::{FetchError, UserProfile, decode_first_profile};
use reqwest::Client;

use crate::Result;
use crate::config::SourceConfig;

/// Something that can produce one random profile per call.
#[async_trait]
pub trait ProfileSource: Send + Sync + 'static {
    async fn fetch_profile(&self) -> std::result::Result<UserProfile, FetchError>;

    /// Short description for log lines.
    fn describe(&self) -> String;
}

/// GET against the random-user API. No query, no auth, no extra headers.
#[derive(Clone)]
pub struct RandomUserClient {
    client: Client,
    endpoint: String,
}

impl RandomUserClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::build(endpoint.into(), None)
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::build(
            config.endpoint.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(endpoint: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProfileSource for RandomUserClient {
    async fn fetch_profile(&self) -> std::result::Result<UserProfile, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        decode_first_profile(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
